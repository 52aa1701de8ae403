pub mod budget;
pub mod insight;
pub mod investor;
pub mod notification;
pub mod profile;
pub mod recommendation;
pub mod settings;
pub mod stats;
pub mod stock;
pub mod transaction;
pub mod user_data;
