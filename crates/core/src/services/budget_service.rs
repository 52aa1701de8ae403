use std::collections::HashMap;

use crate::models::budget::{BudgetAlert, BudgetThresholds};
use crate::models::transaction::Transaction;

/// Compares per-category spend against budget thresholds.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Total spend per category label.
    pub fn spend_by_category(&self, transactions: &[Transaction]) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for tx in transactions {
            *totals.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
        }
        totals
    }

    /// Alerts for every budgeted category whose spend exceeds its budget,
    /// sorted by `percentage_over` (largest first, ties in threshold order).
    ///
    /// Categories without a budget never alert.
    pub fn compute_alerts(
        &self,
        transactions: &[Transaction],
        thresholds: &BudgetThresholds,
    ) -> Vec<BudgetAlert> {
        let spent = self.spend_by_category(transactions);

        let mut alerts: Vec<BudgetAlert> = thresholds
            .iter()
            .filter_map(|(category, budget)| {
                let label = category.label();
                let spent = spent.get(label).copied().unwrap_or(0.0);
                if spent <= budget {
                    return None;
                }
                // A strictly positive overage never reports as 0%.
                let over = ((spent - budget) / budget * 100.0).round().max(1.0);
                Some(BudgetAlert {
                    category: label.to_string(),
                    spent,
                    budget,
                    percentage_over: over as u32,
                })
            })
            .collect();

        // Stable sort keeps threshold order for equal overages.
        alerts.sort_by(|a, b| b.percentage_over.cmp(&a.percentage_over));

        tracing::debug!(
            transactions = transactions.len(),
            alerts = alerts.len(),
            "Computed budget alerts"
        );

        alerts
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
