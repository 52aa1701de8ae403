use crate::models::investor::RiskTolerance;
use crate::models::stock::{StockAction, StockPick, STOCK_PICKS};

/// Read-only access to the curated stock catalog.
pub struct StockService;

impl StockService {
    pub fn new() -> Self {
        Self
    }

    pub fn all_picks(&self) -> &'static [StockPick] {
        &STOCK_PICKS
    }

    /// Picks whose risk level matches the investor's tolerance.
    pub fn picks_for(&self, risk: RiskTolerance) -> Vec<&'static StockPick> {
        STOCK_PICKS.iter().filter(|p| p.risk_level == risk).collect()
    }

    /// Picks flagged as buys, highest expected 10-day increase first.
    pub fn top_buys(&self) -> Vec<&'static StockPick> {
        let mut buys: Vec<&'static StockPick> = STOCK_PICKS
            .iter()
            .filter(|p| p.action == StockAction::Buy)
            .collect();
        buys.sort_by(|a, b| {
            b.ten_day_increase_pct
                .partial_cmp(&a.ten_day_increase_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        buys
    }

    pub fn find(&self, symbol: &str) -> Option<&'static StockPick> {
        STOCK_PICKS.iter().find(|p| p.symbol.eq_ignore_ascii_case(symbol.trim()))
    }

    /// Value of `amount` after the pick's fixed 10-day increase.
    pub fn projected_value(&self, amount: f64, pick: &StockPick) -> f64 {
        amount * (1.0 + pick.ten_day_increase_pct / 100.0)
    }
}

impl Default for StockService {
    fn default() -> Self {
        Self::new()
    }
}
