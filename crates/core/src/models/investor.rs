use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Declared appetite for volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for RiskTolerance {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            _ => Err(CoreError::invalid(format!(
                "unknown risk tolerance '{s}' (expected low, medium or high)"
            ))),
        }
    }
}

/// Current asset mix, used for the rebalancing rule.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingAssets {
    pub stocks: f64,
    pub bonds: f64,
    pub real_estate: f64,
    pub cash: f64,
}

impl ExistingAssets {
    pub fn total(&self) -> f64 {
        self.stocks + self.bonds + self.real_estate + self.cash
    }

    /// Share of stocks in the total, in percent. `None` when the total is zero.
    pub fn stock_pct(&self) -> Option<f64> {
        let total = self.total();
        if total > 0.0 {
            Some(self.stocks / total * 100.0)
        } else {
            None
        }
    }
}

/// Everything the recommendation rules look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
    pub age: u32,
    pub risk_tolerance: RiskTolerance,
    pub investment_horizon_years: u32,
    pub current_portfolio_value: f64,
    pub monthly_income: f64,
    #[serde(default)]
    pub existing_assets: Option<ExistingAssets>,
}

impl InvestorProfile {
    pub fn new(
        age: u32,
        risk_tolerance: RiskTolerance,
        investment_horizon_years: u32,
        current_portfolio_value: f64,
    ) -> Self {
        Self {
            age,
            risk_tolerance,
            investment_horizon_years,
            current_portfolio_value,
            monthly_income: 0.0,
            existing_assets: None,
        }
    }

    pub fn with_monthly_income(mut self, monthly_income: f64) -> Self {
        self.monthly_income = monthly_income;
        self
    }

    pub fn with_existing_assets(mut self, assets: ExistingAssets) -> Self {
        self.existing_assets = Some(assets);
        self
    }

    /// Reject negative or non-finite money fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut fields = vec![
            ("current portfolio value", self.current_portfolio_value),
            ("monthly income", self.monthly_income),
        ];
        if let Some(assets) = &self.existing_assets {
            fields.extend([
                ("stocks", assets.stocks),
                ("bonds", assets.bonds),
                ("real estate", assets.real_estate),
                ("cash", assets.cash),
            ]);
        }
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::invalid(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
