use crate::formatting::{format_currency, format_pct};
use crate::models::insight::{
    GoalForecast, Insight, InsightLevel, InsightReport, RebalanceAdvice, SavingsPlan, SpendingSpike,
};
use crate::models::stats::MonthlyTotal;

use super::profile_service::pct_of_income;

const TARGET_SAVINGS_RATE: f64 = 20.0;
const CRITICAL_EXPENSE_SHARE: f64 = 0.8;
const EMERGENCY_FUND_MONTHS: f64 = 3.0;
const SPIKE_THRESHOLD_PCT: f64 = 15.0;

/// Savings-rate, emergency-fund and goal checks over monthly totals.
///
/// Unlike the advice text, this looks at what is actually left after
/// expenses (income − expenses), not at the declared savings goal.
pub struct InsightService {
    currency_symbol: String,
}

impl InsightService {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn analyze(&self, plan: &SavingsPlan, monthly_income: f64, monthly_expenses: f64) -> InsightReport {
        let monthly_savings = monthly_income - monthly_expenses;
        let savings_rate = pct_of_income(monthly_savings, monthly_income);

        let mut insights = Vec::new();

        if savings_rate < TARGET_SAVINGS_RATE {
            insights.push(Insight {
                level: InsightLevel::Warning,
                message: format!(
                    "Low savings rate ({}%). Consider increasing SIP or cutting expenses.",
                    format_pct(savings_rate)
                ),
            });
        }

        if monthly_expenses > monthly_income * CRITICAL_EXPENSE_SHARE {
            insights.push(Insight {
                level: InsightLevel::Critical,
                message: format!(
                    "Expenses are {}% of income. Budget tightening recommended.",
                    format_pct(pct_of_income(monthly_expenses, monthly_income))
                ),
            });
        }

        // Nothing to cover without expenses.
        if monthly_expenses > 0.0 {
            let months_covered = plan.emergency_fund / monthly_expenses;
            if months_covered < EMERGENCY_FUND_MONTHS {
                let gap = monthly_expenses * EMERGENCY_FUND_MONTHS - plan.emergency_fund;
                insights.push(Insight {
                    level: InsightLevel::Warning,
                    message: format!(
                        "Emergency fund covers only {} months. Target: 3-6 months. Shortfall: {}",
                        format_pct(months_covered),
                        self.money(gap)
                    ),
                });
            }
        }

        let goal_forecast = self.forecast_goal(plan, monthly_savings);
        if plan.goal_amount > 0.0 && !goal_forecast.on_track {
            insights.push(Insight {
                level: InsightLevel::Warning,
                message: format!(
                    "Goal off track by {}%. Need to save {} more.",
                    format_pct(100.0 - goal_forecast.achievement_rate),
                    self.money(goal_forecast.shortfall)
                ),
            });
        }

        tracing::debug!(savings_rate, insights = insights.len(), "Analyzed savings plan");

        InsightReport {
            savings_rate,
            insights,
            goal_forecast,
            rebalance: self.rebalance(plan, monthly_savings),
        }
    }

    /// Project `monthly_savings × goal_months` against the goal amount.
    pub fn forecast_goal(&self, plan: &SavingsPlan, monthly_savings: f64) -> GoalForecast {
        let projected_savings = monthly_savings * plan.goal_months as f64;
        let achievement_rate = if plan.goal_amount > 0.0 {
            projected_savings / plan.goal_amount * 100.0
        } else {
            0.0
        };

        GoalForecast {
            projected_savings,
            goal_amount: plan.goal_amount,
            achievement_rate,
            shortfall: (plan.goal_amount - projected_savings).max(0.0),
            on_track: achievement_rate >= 100.0,
        }
    }

    /// Split monthly savings plus the emergency fund 60/30/10 across
    /// equity, debt and gold SIPs.
    pub fn rebalance(&self, plan: &SavingsPlan, monthly_savings: f64) -> RebalanceAdvice {
        let investable = monthly_savings + plan.emergency_fund;
        RebalanceAdvice {
            emergency_fund: plan.emergency_fund,
            equity_sip: investable * 0.6,
            debt_sip: investable * 0.3,
            gold_sip: investable * 0.1,
        }
    }

    /// Compare the two most recent months; a change beyond ±15% is a spike.
    pub fn detect_spike(&self, months: &[MonthlyTotal]) -> SpendingSpike {
        let [.., prev, latest] = months else {
            return SpendingSpike {
                spike_detected: false,
                change_percent: 0.0,
                message: None,
            };
        };

        let change = if prev.amount > 0.0 {
            (latest.amount - prev.amount) / prev.amount * 100.0
        } else {
            0.0
        };

        if change.abs() > SPIKE_THRESHOLD_PCT {
            SpendingSpike {
                spike_detected: true,
                change_percent: change,
                message: Some(format!(
                    "Expense spike detected: {change:+.1}% ({})",
                    self.money(latest.amount)
                )),
            }
        } else {
            SpendingSpike {
                spike_detected: false,
                change_percent: change,
                message: None,
            }
        }
    }

    fn money(&self, value: f64) -> String {
        format_currency(&self.currency_symbol, value.round())
    }
}
