use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreError;

/// Category keys the advice text calls out by name.
pub const GROCERIES_KEY: &str = "groceries";
pub const ENTERTAINMENT_KEY: &str = "entertainment";

/// Raw monthly figures entered by the user on the setup page.
///
/// Serialized in camelCase so the same JSON shape can be shared with the
/// web view's persisted `userFinancialData` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub name: String,

    pub monthly_income: f64,

    pub monthly_savings_goal: f64,

    /// Monthly spend per category (e.g. "groceries" → 12000).
    pub expenses: BTreeMap<String, f64>,
}

impl FinancialProfile {
    pub fn new(name: impl Into<String>, monthly_income: f64, monthly_savings_goal: f64) -> Self {
        Self {
            name: name.into(),
            monthly_income,
            monthly_savings_goal,
            expenses: BTreeMap::new(),
        }
    }

    /// Builder-style helper to add one expense category.
    pub fn with_expense(mut self, category: impl Into<String>, amount: f64) -> Self {
        self.expenses.insert(category.into(), amount);
        self
    }

    /// Sum of all expense categories.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.values().sum()
    }

    /// Look up a category amount, ignoring case. Missing categories are 0.
    pub fn expense(&self, category: &str) -> f64 {
        self.expenses
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(category))
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    /// Reject negative or non-finite amounts.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_amount("monthly income", self.monthly_income)?;
        check_amount("monthly savings goal", self.monthly_savings_goal)?;
        for (category, amount) in &self.expenses {
            if category.trim().is_empty() {
                return Err(CoreError::invalid("expense category must not be empty"));
            }
            check_amount(&format!("expense '{category}'"), *amount)?;
        }
        Ok(())
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::invalid(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Canonical figures derived from a [`FinancialProfile`].
///
/// Ratio fields are `0.0` when monthly income is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFigures {
    pub name: String,
    pub monthly_income: f64,
    pub monthly_savings_goal: f64,
    pub total_expenses: f64,

    /// income − total expenses
    pub disposable_income: f64,

    /// savings goal / income × 100
    pub savings_rate_pct: f64,

    /// total expenses / income × 100
    pub expense_ratio_pct: f64,

    /// income − total expenses − savings goal
    pub remaining_after_goal: f64,

    pub groceries: f64,
    pub entertainment: f64,
}
