use serde::{Deserialize, Serialize};

/// Inputs for the savings-goal analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub goal_amount: f64,
    pub goal_months: u32,
    pub emergency_fund: f64,
}

impl Default for SavingsPlan {
    fn default() -> Self {
        Self {
            goal_amount: 0.0,
            goal_months: 12,
            emergency_fund: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightLevel {
    Warning,
    Critical,
}

/// One observation about the user's finances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub level: InsightLevel,
    pub message: String,
}

/// Projection of how far monthly savings get toward the goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalForecast {
    pub projected_savings: f64,
    pub goal_amount: f64,
    /// projected / goal × 100, or 0 when there is no goal
    pub achievement_rate: f64,
    pub shortfall: f64,
    pub on_track: bool,
}

/// Suggested split of investable money.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceAdvice {
    pub emergency_fund: f64,
    pub equity_sip: f64,
    pub debt_sip: f64,
    pub gold_sip: f64,
}

/// Month-over-month change of the two most recent months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSpike {
    pub spike_detected: bool,
    pub change_percent: f64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Everything the insight engine produces for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub savings_rate: f64,
    pub insights: Vec<Insight>,
    pub goal_forecast: GoalForecast,
    pub rebalance: RebalanceAdvice,
}
