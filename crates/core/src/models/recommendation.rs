use serde::{Deserialize, Serialize};

/// Broad role a product plays in a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Growth,
    Income,
    Balanced,
    Conservative,
}

impl ProductCategory {
    /// Optimal allocation band (min %, max %) for this category.
    pub fn optimal_band(&self) -> (f64, f64) {
        match self {
            ProductCategory::Growth => (10.0, 30.0),
            ProductCategory::Income => (10.0, 25.0),
            ProductCategory::Balanced => (15.0, 35.0),
            ProductCategory::Conservative => (20.0, 50.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Identifier of every product the recommendation rules can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductId {
    TechGrowth,
    EmergingMarkets,
    InternationalIndex,
    DividendAristocrats,
    CorporateBonds,
    TreasuryBond,
    SmallCapGrowth,
    Sp500Index,
}

/// Static constants for one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: ProductId,
    /// Stable numeric id shown to the presentation layer
    pub number: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ProductCategory,
    pub risk_level: RiskLevel,
    pub expected_return_pct: f64,
    /// Fraction of current portfolio value suggested for this product
    pub allocation_fraction: f64,
    pub score: f64,
    pub reason: &'static str,
    pub ticker_symbol: &'static str,
}

/// The product table. Every score, fraction and return lives here.
pub const PRODUCTS: [Product; 8] = [
    Product {
        id: ProductId::TechGrowth,
        number: 1,
        name: "Tech Growth Fund",
        description: "High-growth technology sector ETF with exposure to innovation",
        category: ProductCategory::Growth,
        risk_level: RiskLevel::High,
        expected_return_pct: 8.5,
        allocation_fraction: 0.10,
        score: 4.8,
        reason: "Matches your high-risk tolerance and long investment horizon",
        ticker_symbol: "QQQ",
    },
    Product {
        id: ProductId::EmergingMarkets,
        number: 2,
        name: "Emerging Markets Fund",
        description: "Diversified exposure to high-growth emerging markets",
        category: ProductCategory::Growth,
        risk_level: RiskLevel::High,
        expected_return_pct: 7.8,
        allocation_fraction: 0.08,
        score: 4.5,
        reason: "Provides international diversification with strong growth potential",
        ticker_symbol: "EEM",
    },
    Product {
        id: ProductId::InternationalIndex,
        number: 3,
        name: "International Index Fund",
        description: "Global market diversification across developed and emerging markets",
        category: ProductCategory::Balanced,
        risk_level: RiskLevel::Medium,
        expected_return_pct: 5.8,
        allocation_fraction: 0.12,
        score: 4.6,
        reason: "Reduces concentration risk and increases geographic diversification",
        ticker_symbol: "VXUS",
    },
    Product {
        id: ProductId::DividendAristocrats,
        number: 4,
        name: "Dividend Aristocrats",
        description: "Stable dividend-paying stocks with 25+ years of dividend growth",
        category: ProductCategory::Income,
        risk_level: RiskLevel::Low,
        expected_return_pct: 3.2,
        allocation_fraction: 0.15,
        score: 4.7,
        reason: "Provides stable income stream with minimal volatility for your portfolio",
        ticker_symbol: "NOBL",
    },
    Product {
        id: ProductId::CorporateBonds,
        number: 5,
        name: "Corporate Bonds Fund",
        description: "Investment-grade corporate bonds with stable returns",
        category: ProductCategory::Conservative,
        risk_level: RiskLevel::Low,
        expected_return_pct: 4.1,
        allocation_fraction: 0.20,
        score: 4.3,
        reason: "Conservative fixed-income allocation suitable for risk-averse investors",
        ticker_symbol: "LQD",
    },
    Product {
        id: ProductId::TreasuryBond,
        number: 6,
        name: "Treasury Bond Fund",
        description: "US Treasury bonds providing ultimate safety and stability",
        category: ProductCategory::Conservative,
        risk_level: RiskLevel::Low,
        expected_return_pct: 3.5,
        allocation_fraction: 0.15,
        score: 4.1,
        reason: "Highest-safety asset class with government backing",
        ticker_symbol: "SHV",
    },
    Product {
        id: ProductId::SmallCapGrowth,
        number: 7,
        name: "Small Cap Growth Fund",
        description: "Small-cap stocks with high growth potential for long-term investors",
        category: ProductCategory::Growth,
        risk_level: RiskLevel::High,
        expected_return_pct: 9.2,
        allocation_fraction: 0.08,
        score: 4.4,
        reason: "Your young age allows for aggressive growth positions with recovery time",
        ticker_symbol: "VBR",
    },
    Product {
        id: ProductId::Sp500Index,
        number: 8,
        name: "S&P 500 Index Fund",
        description: "Core holding tracking 500 large-cap US companies",
        category: ProductCategory::Balanced,
        risk_level: RiskLevel::Medium,
        expected_return_pct: 6.5,
        allocation_fraction: 0.12,
        score: 4.9,
        reason: "Increase stock allocation to match your risk profile and boost returns",
        ticker_symbol: "VOO",
    },
];

impl ProductId {
    /// Constants for this product.
    pub fn product(&self) -> &'static Product {
        // PRODUCTS is declared in ProductId order.
        &PRODUCTS[*self as usize]
    }
}

/// One scored suggestion for the investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: u32,
    pub product: ProductId,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub risk_level: RiskLevel,
    /// e.g. "8.5%"
    pub expected_return: String,
    /// Rounded portfolio value × product fraction
    pub suggested_amount: f64,
    pub score: f64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker_symbol: Option<String>,
}

impl Recommendation {
    pub fn from_product(product: &Product, portfolio_value: f64) -> Self {
        Self {
            id: product.number,
            product: product.id,
            name: product.name.to_string(),
            description: product.description.to_string(),
            category: product.category,
            risk_level: product.risk_level,
            expected_return: format!("{}%", product.expected_return_pct),
            suggested_amount: (portfolio_value * product.allocation_fraction).round(),
            score: product.score,
            reason: product.reason.to_string(),
            ticker_symbol: Some(product.ticker_symbol.to_string()),
        }
    }
}
