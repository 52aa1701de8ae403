pub mod advice_service;
pub mod budget_service;
pub mod chat_service;
pub mod insight_service;
pub mod notification_service;
pub mod profile_service;
pub mod recommendation_service;
pub mod stats_service;
pub mod stock_service;
