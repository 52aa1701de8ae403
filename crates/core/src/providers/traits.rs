use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::models::insight::Insight;

/// Body of `POST /api/users`. The backend reads snake_case keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegistration {
    pub name: String,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_savings_goal: f64,
    pub expenses: BTreeMap<String, f64>,
}

/// Body returned by `GET /api/advice/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteAdvice {
    pub advice: String,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

/// Abstraction over the remote advice backend.
///
/// The local engines produce the same shapes, so a view can use either
/// side (or both) interchangeably. Tests substitute a mock implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AdviceBackend: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Register a user profile; returns the backend's user id.
    async fn register_user(&self, registration: &UserRegistration) -> Result<String, CoreError>;

    /// Fetch generated advice for a previously registered user.
    async fn fetch_advice(&self, user_id: &str) -> Result<RemoteAdvice, CoreError>;
}
