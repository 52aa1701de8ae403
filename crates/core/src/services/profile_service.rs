use crate::models::profile::{FinancialProfile, NormalizedFigures, ENTERTAINMENT_KEY, GROCERIES_KEY};

/// Derives canonical figures (totals, ratios, remainder) from a raw profile.
///
/// Pure business logic, no I/O. Ratios are reported as `0.0` when monthly
/// income is zero instead of dividing by zero.
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, profile: &FinancialProfile) -> NormalizedFigures {
        let income = profile.monthly_income;
        let goal = profile.monthly_savings_goal;
        let total_expenses = profile.total_expenses();

        let figures = NormalizedFigures {
            name: profile.name.clone(),
            monthly_income: income,
            monthly_savings_goal: goal,
            total_expenses,
            disposable_income: income - total_expenses,
            savings_rate_pct: pct_of_income(goal, income),
            expense_ratio_pct: pct_of_income(total_expenses, income),
            remaining_after_goal: income - total_expenses - goal,
            groceries: profile.expense(GROCERIES_KEY),
            entertainment: profile.expense(ENTERTAINMENT_KEY),
        };

        tracing::debug!(
            total_expenses,
            savings_rate_pct = figures.savings_rate_pct,
            remaining_after_goal = figures.remaining_after_goal,
            "Normalized financial profile"
        );

        figures
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}

/// `value / income × 100`, or 0 when income is zero.
pub(crate) fn pct_of_income(value: f64, income: f64) -> f64 {
    if income > 0.0 {
        value / income * 100.0
    } else {
        0.0
    }
}
