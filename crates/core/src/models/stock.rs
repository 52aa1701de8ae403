use serde::{Deserialize, Serialize};

use super::investor::RiskTolerance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAction {
    Buy,
    Hold,
    Sell,
}

/// A curated stock suggestion with a fixed 10-day outlook.
///
/// All figures are static; nothing here is fetched from a market.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockPick {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    /// Day change in percent
    pub change_pct: f64,
    pub risk_level: RiskTolerance,
    pub action: StockAction,
    pub reasons: [&'static str; 3],
    pub prediction: &'static str,
    /// Expected increase over the next 10 days, in percent
    pub ten_day_increase_pct: f64,
}

pub const STOCK_PICKS: [StockPick; 6] = [
    StockPick {
        symbol: "RELIANCE",
        name: "Reliance Industries",
        price: 2850.0,
        change_pct: 4.2,
        risk_level: RiskTolerance::Low,
        action: StockAction::Buy,
        reasons: ["Strong fundamentals", "Consistent dividends", "Large-cap stability"],
        prediction: "Based on market trends and technical analysis, RELIANCE is expected to show steady growth.",
        ten_day_increase_pct: 8.5,
    },
    StockPick {
        symbol: "TCS",
        name: "Tata Consultancy Services",
        price: 3940.0,
        change_pct: 2.1,
        risk_level: RiskTolerance::Low,
        action: StockAction::Buy,
        reasons: ["IT sector leader", "Global presence", "Dividend payer"],
        prediction: "TCS shows strong momentum with positive market sentiment.",
        ten_day_increase_pct: 6.2,
    },
    StockPick {
        symbol: "HDFC",
        name: "HDFC Bank",
        price: 1680.0,
        change_pct: 3.8,
        risk_level: RiskTolerance::Medium,
        action: StockAction::Buy,
        reasons: ["Strong financials", "Growth potential", "Sector leader"],
        prediction: "Banking sector recovery expected to drive HDFC growth.",
        ten_day_increase_pct: 12.3,
    },
    StockPick {
        symbol: "INFY",
        name: "Infosys",
        price: 1850.0,
        change_pct: -1.5,
        risk_level: RiskTolerance::Medium,
        action: StockAction::Hold,
        reasons: ["Wait for better entry", "Good fundamentals", "Consolidation phase"],
        prediction: "Currently in consolidation phase. Wait for clarity before investing.",
        ten_day_increase_pct: 4.8,
    },
    StockPick {
        symbol: "WIPRO",
        name: "Wipro",
        price: 520.0,
        change_pct: 5.3,
        risk_level: RiskTolerance::Medium,
        action: StockAction::Buy,
        reasons: ["Undervalued", "Recovery potential", "Strong balance sheet"],
        prediction: "Recovery play with good upside potential in next 10 days.",
        ten_day_increase_pct: 14.5,
    },
    StockPick {
        symbol: "BAJAJ-AUTO",
        name: "Bajaj Auto",
        price: 1150.0,
        change_pct: 3.2,
        risk_level: RiskTolerance::Low,
        action: StockAction::Buy,
        reasons: ["Strong demand", "Quality products", "Market leadership"],
        prediction: "Auto sector showing signs of recovery with increased demand.",
        ten_day_increase_pct: 7.9,
    },
];
