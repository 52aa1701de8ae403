use crate::models::investor::{InvestorProfile, RiskTolerance};
use crate::models::recommendation::{ProductCategory, ProductId, Recommendation};

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Stock share below which the rebalancing rule fires, in percent.
const REBALANCE_STOCK_PCT: f64 = 50.0;

/// Maps an investor profile to a scored, sorted list of products.
///
/// Each rule is evaluated independently; a profile can match any number of
/// them. Product constants come from the static product table.
pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        Self
    }

    /// Products whose rule matched, in rule-evaluation order.
    pub fn eligible_products(&self, profile: &InvestorProfile) -> Vec<ProductId> {
        let risk = profile.risk_tolerance;
        let mut products = Vec::new();

        // Long-horizon growth
        if risk == RiskTolerance::High && profile.investment_horizon_years >= 10 {
            products.extend([ProductId::TechGrowth, ProductId::EmergingMarkets]);
        }

        // Diversification
        if matches!(risk, RiskTolerance::Medium | RiskTolerance::High) {
            products.push(ProductId::InternationalIndex);
        }

        // Income
        if profile.age >= 50 || risk == RiskTolerance::Low {
            products.push(ProductId::DividendAristocrats);
        }

        // Conservative fixed income
        if risk == RiskTolerance::Low {
            products.extend([ProductId::CorporateBonds, ProductId::TreasuryBond]);
        }

        // Young investors
        if profile.age < 35 {
            products.push(ProductId::SmallCapGrowth);
        }

        // Rebalancing toward stocks
        if risk != RiskTolerance::Low {
            let under_weight = profile
                .existing_assets
                .and_then(|assets| assets.stock_pct())
                .is_some_and(|pct| pct < REBALANCE_STOCK_PCT);
            if under_weight {
                products.push(ProductId::Sp500Index);
            }
        }

        products
    }

    /// Top five recommendations, highest score first. Equal scores keep
    /// rule-evaluation order. Empty when no rule matched.
    pub fn generate(&self, profile: &InvestorProfile) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = self
            .eligible_products(profile)
            .into_iter()
            .map(|id| Recommendation::from_product(id.product(), profile.current_portfolio_value))
            .collect();

        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            risk = %profile.risk_tolerance,
            age = profile.age,
            count = recommendations.len(),
            "Generated recommendations"
        );

        recommendations
    }

    /// Rate how well an allocation fits the category's optimal band:
    /// 5 inside the band, 4 within five points of it, otherwise 3.
    pub fn allocation_score(
        &self,
        investment_amount: f64,
        portfolio_value: f64,
        category: ProductCategory,
    ) -> u8 {
        if portfolio_value <= 0.0 {
            return 3;
        }
        let pct = investment_amount / portfolio_value * 100.0;
        let (min, max) = category.optimal_band();

        if pct >= min && pct <= max {
            5
        } else if pct >= min - 5.0 && pct <= max + 5.0 {
            4
        } else {
            3
        }
    }
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new()
    }
}
