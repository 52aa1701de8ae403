use serde::{Deserialize, Serialize};

use crate::formatting::DEFAULT_CURRENCY_SYMBOL;

use super::budget::BudgetThresholds;

/// Default base URL of the remote advice backend.
pub const DEFAULT_ADVICE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding [`Settings::advice_backend_url`].
pub const ENV_ADVICE_URL: &str = "FINAI_ADVICE_URL";

/// Environment variable overriding [`Settings::currency_symbol`].
pub const ENV_CURRENCY_SYMBOL: &str = "FINAI_CURRENCY_SYMBOL";

/// User-configurable settings, stored inside the encrypted user file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix for every amount in generated text (e.g., "₹", "$").
    pub currency_symbol: String,

    /// Spending ceilings used by budget alerts.
    pub budget_thresholds: BudgetThresholds,

    /// Base URL of the remote advice backend.
    pub advice_backend_url: String,

    /// Request timeout for the advice backend, in seconds.
    pub backend_timeout_secs: u64,

    /// Expenses above this share of income raise a warning notification.
    pub expense_warning_ratio: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            budget_thresholds: BudgetThresholds::default(),
            advice_backend_url: DEFAULT_ADVICE_URL.to_string(),
            backend_timeout_secs: 30,
            expense_warning_ratio: 0.7,
        }
    }
}

impl Settings {
    /// Apply `FINAI_ADVICE_URL` / `FINAI_CURRENCY_SYMBOL` if they are set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::with_env_overrides`] with a custom lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_ADVICE_URL).filter(|v| !v.trim().is_empty()) {
            self.advice_backend_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL).filter(|v| !v.trim().is_empty()) {
            self.currency_symbol = symbol.trim().to_string();
        }
        self
    }
}
