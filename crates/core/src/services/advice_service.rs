use serde::{Deserialize, Serialize};

use crate::formatting::{format_currency, format_pct, DEFAULT_CURRENCY_SYMBOL};
use crate::models::investor::RiskTolerance;
use crate::models::profile::NormalizedFigures;

const GENERAL_TIPS: &str = "\nGeneral Tips:\n\
• Track your expenses regularly\n\
• Set up automatic transfers for savings\n\
• Build an emergency fund\n\
• Invest wisely for long-term growth\n\
• Check out the Stock Recommendations page for investment ideas";

/// Profile summary used to prime an external advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorContext {
    pub total_portfolio: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Fraction of income saved (0.2 = 20%)
    pub savings_rate: f64,
    pub risk_tolerance: RiskTolerance,
    pub financial_goals: Vec<String>,
    pub age: u32,
}

/// Canned questions offered next to the advisor prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorTopic {
    Investment,
    Budgeting,
    Goals,
    Retirement,
    Savings,
    Risk,
}

impl AdvisorTopic {
    pub fn prompt(&self) -> &'static str {
        match self {
            AdvisorTopic::Investment => "What investment changes should I consider to optimize my portfolio?",
            AdvisorTopic::Budgeting => "How can I improve my budgeting and reduce expenses?",
            AdvisorTopic::Goals => "What's the best strategy to achieve my financial goals?",
            AdvisorTopic::Retirement => "How should I plan for retirement?",
            AdvisorTopic::Savings => "How can I increase my savings rate?",
            AdvisorTopic::Risk => "Is my current risk tolerance aligned with my age?",
        }
    }
}

/// Builds the deterministic advice report shown on the dashboard.
///
/// Sections are appended in a fixed order:
/// header, income status, savings-goal tier, remainder tier,
/// groceries call-out, entertainment call-out, general tips.
pub struct AdviceService {
    currency_symbol: String,
}

impl AdviceService {
    pub fn new() -> Self {
        Self::with_currency_symbol(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn with_currency_symbol(symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: symbol.into(),
        }
    }

    fn money(&self, value: f64) -> String {
        format_currency(&self.currency_symbol, value)
    }

    pub fn generate_advice_text(&self, figures: &NormalizedFigures) -> String {
        let income = figures.monthly_income;
        let goal = figures.monthly_savings_goal;
        let savings_pct = figures.savings_rate_pct;
        let remaining = figures.remaining_after_goal;

        let mut advice = format!("Financial Analysis for {}:\n\n", figures.name);

        advice.push_str(&format!(
            "Income Status:\nYour monthly income is {}. ",
            self.money(income)
        ));
        advice.push_str(&format!(
            "Your total monthly expenses are {} ({}% of income).\n\n",
            self.money(figures.total_expenses),
            format_pct(figures.expense_ratio_pct)
        ));

        let goal_text = format!("{} ({}%)", self.money(goal), format_pct(savings_pct));
        if savings_pct >= 20.0 {
            advice.push_str(&format!(
                "Savings Goal:\nYour savings goal of {goal_text} is excellent! You're prioritizing your future.\n\n"
            ));
        } else if savings_pct >= 10.0 {
            advice.push_str(&format!(
                "Savings Goal:\nYour savings goal of {goal_text} is good, but consider increasing it to at least 20% of your income.\n\n"
            ));
        } else {
            advice.push_str(&format!(
                "Savings Goal:\nYour savings goal of {goal_text} is conservative. Try to aim for at least 20% of your income.\n\n"
            ));
        }

        if remaining > 0.0 {
            advice.push_str(&format!(
                "Remaining Amount:\nAfter expenses and savings, you have {} remaining. Consider investing this amount in:\n\
                 • Fixed Deposits for guaranteed returns\n\
                 • Mutual Funds for long-term wealth building\n\
                 • Emergency Fund (aim for 6 months of expenses)\n\n",
                self.money(remaining)
            ));
        } else if remaining == 0.0 {
            advice.push_str(
                "Budget Balance:\nYour income perfectly matches your expenses and savings goal! Your budget is well-balanced.\n\n",
            );
        } else {
            advice.push_str(&format!(
                "Budget Alert:\nYour expenses and savings goal exceed your income by {}. Consider:\n\
                 • Reducing discretionary spending (entertainment, others)\n\
                 • Realigning your savings goal\n\
                 • Increasing your income\n\n",
                self.money(remaining.abs())
            ));
        }

        if figures.groceries > income * 0.2 {
            advice.push_str(&format!(
                "Groceries:\nYour grocery spending is {}. Try meal planning and bulk buying to reduce costs.\n",
                self.money(figures.groceries)
            ));
        }

        if figures.entertainment > income * 0.1 {
            advice.push_str(&format!(
                "Entertainment:\nYour entertainment spending ({}) is significant. Set a limit of 5-10% of income.\n",
                self.money(figures.entertainment)
            ));
        }

        advice.push_str(GENERAL_TIPS);
        advice
    }

    /// System prompt describing the client's profile for an external advisor.
    pub fn advisor_context(&self, ctx: &AdvisorContext) -> String {
        let disposable = ctx.monthly_income - ctx.monthly_expenses;
        format!(
            "You are an expert financial advisor helping a client with their personal finance. Here's their financial profile:\n\
             \n\
             Portfolio Value: {}\n\
             Monthly Income: {}\n\
             Monthly Expenses: {}\n\
             Disposable Income: {}\n\
             Savings Rate: {}%\n\
             Risk Tolerance: {}\n\
             Age: {}\n\
             Financial Goals: {}\n\
             \n\
             Provide personalized, actionable financial advice based on their profile. Be specific with numbers and percentages. Explain the reasoning behind your recommendations. Keep responses concise but informative.",
            self.money(ctx.total_portfolio),
            self.money(ctx.monthly_income),
            self.money(ctx.monthly_expenses),
            self.money(disposable),
            format_pct(ctx.savings_rate * 100.0),
            ctx.risk_tolerance,
            ctx.age,
            ctx.financial_goals.join(", "),
        )
    }
}

impl Default for AdviceService {
    fn default() -> Self {
        Self::new()
    }
}
