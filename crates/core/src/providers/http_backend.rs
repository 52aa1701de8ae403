use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::settings::Settings;
use super::traits::{AdviceBackend, RemoteAdvice, UserRegistration};

/// HTTP client for the advice backend.
///
/// - `POST {base}/api/users` → `{ "user_id": 7, ... }` (integer or string id)
/// - `GET {base}/api/advice/{userId}` → `{ "advice": "...", "insights": [...] }`
///
/// Non-2xx responses become [`CoreError::Api`] carrying the status and body.
pub struct HttpAdviceBackend {
    client: Client,
    base_url: String,
}

impl HttpAdviceBackend {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(timeout_secs));
        #[cfg(target_arch = "wasm32")]
        let _ = timeout_secs;
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.advice_backend_url.clone(), settings.backend_timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    pub fn advice_url(&self, user_id: &str) -> String {
        format!("{}/api/advice/{}", self.base_url, user_id.trim())
    }

    async fn check(endpoint: &str, resp: reqwest::Response) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(endpoint, status = status.as_u16(), "Advice backend returned an error");
        Err(CoreError::Api {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: body,
        })
    }
}

// ── Backend response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct RegisterResponse {
    user_id: UserId,
}

/// Database-backed servers return an integer key, others a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserId {
    Int(i64),
    Text(String),
}

impl UserId {
    fn into_string(self) -> String {
        match self {
            UserId::Int(id) => id.to_string(),
            UserId::Text(id) => id,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AdviceBackend for HttpAdviceBackend {
    fn name(&self) -> &str {
        "HTTP advice backend"
    }

    async fn register_user(&self, registration: &UserRegistration) -> Result<String, CoreError> {
        let url = self.users_url();
        let resp = self.client.post(&url).json(registration).send().await?;
        let resp = Self::check("/api/users", resp).await?;
        let status = resp.status().as_u16();

        let body: RegisterResponse = resp.json().await.map_err(|e| CoreError::Api {
            endpoint: "/api/users".into(),
            status,
            message: format!("Failed to parse registration response: {e}"),
        })?;

        let user_id = body.user_id.into_string();
        tracing::info!(user_id = %user_id, "Registered user with advice backend");
        Ok(user_id)
    }

    async fn fetch_advice(&self, user_id: &str) -> Result<RemoteAdvice, CoreError> {
        if user_id.trim().is_empty() {
            return Err(CoreError::ValidationError("userId parameter is required".into()));
        }

        let resp = self.client.get(self.advice_url(user_id)).send().await?;
        let resp = Self::check("/api/advice", resp).await?;
        let status = resp.status().as_u16();

        resp.json::<RemoteAdvice>().await.map_err(|e| CoreError::Api {
            endpoint: "/api/advice".into(),
            status,
            message: format!("Failed to parse advice response: {e}"),
        })
    }
}
