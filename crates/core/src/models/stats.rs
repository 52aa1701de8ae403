use serde::{Deserialize, Serialize};

/// Direction of a category's recent spend relative to its overall average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Aggregated spend for one category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: String,

    pub total_spent: f64,

    /// total_spent / transactions, rounded to 2 decimals
    pub average: f64,

    pub transactions: usize,

    pub trend: Trend,
}

/// Total spend for one calendar month ("YYYY-MM").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub amount: f64,
}
