use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::transaction::ExpenseCategory;

/// Per-category spending ceilings used only for alerting.
///
/// Iteration order is insertion order; alert ties keep this order.
/// Setting a category that already has a budget replaces it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetThresholds {
    limits: Vec<(ExpenseCategory, f64)>,
}

impl BudgetThresholds {
    /// An empty set: nothing can alert.
    pub fn empty() -> Self {
        Self { limits: Vec::new() }
    }

    /// Set (or replace) the budget for one category. Budgets must be positive.
    pub fn set(&mut self, category: ExpenseCategory, budget: f64) -> Result<(), CoreError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(CoreError::invalid(format!(
                "budget for {category} must be positive, got {budget}"
            )));
        }
        match self.limits.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = budget,
            None => self.limits.push((category, budget)),
        }
        Ok(())
    }

    pub fn with(mut self, category: ExpenseCategory, budget: f64) -> Result<Self, CoreError> {
        self.set(category, budget)?;
        Ok(self)
    }

    /// Remove a category's budget. Returns `true` if one was set.
    pub fn remove(&mut self, category: ExpenseCategory) -> bool {
        let before = self.limits.len();
        self.limits.retain(|(c, _)| *c != category);
        self.limits.len() != before
    }

    pub fn get(&self, category: ExpenseCategory) -> Option<f64> {
        self.limits
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, b)| *b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, f64)> + '_ {
        self.limits.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl Default for BudgetThresholds {
    /// Groceries 500, Utilities 150, Entertainment 150, Transportation 250.
    fn default() -> Self {
        Self {
            limits: vec![
                (ExpenseCategory::Groceries, 500.0),
                (ExpenseCategory::Utilities, 150.0),
                (ExpenseCategory::Entertainment, 150.0),
                (ExpenseCategory::Transportation, 250.0),
            ],
        }
    }
}

/// A category whose spend exceeded its budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
    /// Rounded overage percentage, always ≥ 1
    pub percentage_over: u32,
}

/// A suggested place to cut spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSuggestion {
    pub category: String,
    pub suggestion: String,
    pub potential_savings: f64,
}
