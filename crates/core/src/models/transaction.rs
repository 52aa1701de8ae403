use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// The fixed set of categories offered by the expense form.
///
/// Transactions themselves carry a free-text category so user-defined
/// labels survive; this enum is used where a closed set is required
/// (budget thresholds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Groceries,
    Utilities,
    Entertainment,
    Transportation,
    FoodAndDining,
    Shopping,
    HealthAndMedical,
    Education,
    Travel,
    Subscriptions,
    Insurance,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 12] = [
        ExpenseCategory::Groceries,
        ExpenseCategory::Utilities,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Transportation,
        ExpenseCategory::FoodAndDining,
        ExpenseCategory::Shopping,
        ExpenseCategory::HealthAndMedical,
        ExpenseCategory::Education,
        ExpenseCategory::Travel,
        ExpenseCategory::Subscriptions,
        ExpenseCategory::Insurance,
        ExpenseCategory::Other,
    ];

    /// Display label, identical to the category string stored on transactions.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::FoodAndDining => "Food & Dining",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::HealthAndMedical => "Health & Medical",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Subscriptions => "Subscriptions",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = CoreError;

    /// Parses a label case-insensitively ("food & dining" → `FoodAndDining`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::invalid(format!("unknown expense category '{s}'")))
    }
}

/// A single recorded expense. Immutable once created; it can only be removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,

    /// Free-text category label (known labels come from [`ExpenseCategory`]).
    pub category: String,

    /// Always positive
    pub amount: f64,

    pub date: NaiveDate,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    /// Create a validated transaction with a fresh id.
    pub fn new(category: impl Into<String>, amount: f64, date: NaiveDate) -> Result<Self, CoreError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(CoreError::invalid("transaction category must not be empty"));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::invalid(format!(
                "transaction amount must be positive, got {amount}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            category,
            amount,
            date,
            description: None,
            recurring: false,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }
}
