use std::collections::HashMap;

use crate::models::budget::BudgetSuggestion;
use crate::models::stats::{CategoryStats, MonthlyTotal, Trend};
use crate::models::transaction::{ExpenseCategory, Transaction};

/// How many of a category's most recent transactions form the "recent" window.
pub const RECENT_WINDOW: usize = 5;

/// Maximum number of budget suggestions returned.
pub const MAX_SUGGESTIONS: usize = 3;

/// Number of months kept by [`StatsService::monthly_totals`].
pub const MONTHLY_WINDOW: usize = 6;

/// Aggregates transactions into per-category statistics and derives
/// budget optimization suggestions from them.
///
/// Category labels are open-ended: any string a transaction carries is
/// grouped and reported.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Per-category totals, averages and trend, sorted by total spend
    /// (largest first; ties keep first-encounter order).
    ///
    /// Transactions are expected oldest first.
    pub fn compute_stats(&self, transactions: &[Transaction]) -> Vec<CategoryStats> {
        let mut stats: Vec<CategoryStats> = group_in_order(transactions, |tx| tx.category.clone())
            .into_iter()
            .map(|(category, amounts)| {
                let total_spent: f64 = amounts.iter().sum();
                let average = total_spent / amounts.len() as f64;

                let recent = &amounts[amounts.len().saturating_sub(RECENT_WINDOW)..];
                let recent_average = recent.iter().sum::<f64>() / recent.len() as f64;

                CategoryStats {
                    category,
                    total_spent,
                    average: round_cents(average),
                    transactions: amounts.len(),
                    trend: classify_trend(recent_average, average),
                }
            })
            .collect();

        stats.sort_by(|a, b| {
            b.total_spent
                .partial_cmp(&a.total_spent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(categories = stats.len(), "Computed category stats");
        stats
    }

    /// Up to three suggestions, generated in this order:
    /// overall spending, entertainment share, then each up-trending category.
    ///
    /// An "Entertainment" category that is both over 10% of income and
    /// trending up yields two separate suggestions.
    pub fn suggest_optimizations(
        &self,
        transactions: &[Transaction],
        monthly_income: f64,
    ) -> Vec<BudgetSuggestion> {
        let stats = self.compute_stats(transactions);
        let total_spending: f64 = stats.iter().map(|s| s.total_spent).sum();
        let mut suggestions = Vec::new();

        if total_spending > monthly_income * 0.8 {
            suggestions.push(BudgetSuggestion {
                category: "Overall".to_string(),
                suggestion: "Your spending is consuming over 80% of income. Consider cutting discretionary expenses."
                    .to_string(),
                potential_savings: total_spending - monthly_income * 0.7,
            });
        }

        let entertainment = ExpenseCategory::Entertainment.label();
        if let Some(stat) = stats
            .iter()
            .find(|s| s.category == entertainment && s.total_spent > monthly_income * 0.1)
        {
            suggestions.push(BudgetSuggestion {
                category: entertainment.to_string(),
                suggestion: "Entertainment spending is above recommended 10% of income. Look for lower-cost alternatives."
                    .to_string(),
                potential_savings: stat.total_spent - monthly_income * 0.1,
            });
        }

        for stat in stats.iter().filter(|s| s.trend == Trend::Up) {
            suggestions.push(BudgetSuggestion {
                category: stat.category.clone(),
                suggestion: format!(
                    "{} spending is trending upward. Consider setting stricter controls.",
                    stat.category
                ),
                potential_savings: stat.average * 0.15,
            });
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// Spend per calendar month ("YYYY-MM") in encounter order, last six months.
    pub fn monthly_totals(&self, transactions: &[Transaction]) -> Vec<MonthlyTotal> {
        let grouped = group_in_order(transactions, |tx| tx.date.format("%Y-%m").to_string());
        let skip = grouped.len().saturating_sub(MONTHLY_WINDOW);
        grouped
            .into_iter()
            .skip(skip)
            .map(|(month, amounts)| MonthlyTotal {
                month,
                amount: amounts.iter().sum(),
            })
            .collect()
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Group amounts by key, keeping keys in first-encounter order.
fn group_in_order<F>(transactions: &[Transaction], key: F) -> Vec<(String, Vec<f64>)>
where
    F: Fn(&Transaction) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for tx in transactions {
        let k = key(tx);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(tx.amount),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![tx.amount]));
            }
        }
    }
    groups
}

fn classify_trend(recent_average: f64, average: f64) -> Trend {
    if recent_average > average * 1.1 {
        Trend::Up
    } else if recent_average < average * 0.9 {
        Trend::Down
    } else {
        Trend::Stable
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
