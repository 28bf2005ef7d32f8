//! The standard six-tier profile catalog.
//!
//! Thresholds: 20 / 35 / 50 / 65 / 80, inclusive upper bounds, with the
//! Very Aggressive band open-ended.

use once_cell::sync::Lazy;

use super::allocation::AssetAllocation;
use super::profile::{ProfileBand, ProfileCatalog, RiskProfile};
use super::tier::RiskTier;

static STANDARD: Lazy<ProfileCatalog> = Lazy::new(|| {
    build_standard().expect("standard profile catalog must be valid")
});

/// The cached standard catalog.
pub(super) fn standard_profiles() -> &'static ProfileCatalog {
    &STANDARD
}

fn allocation(equity: u8, debt: u8, gold: u8, cash: u8) -> AssetAllocation {
    AssetAllocation::new(equity, debt, gold, cash)
        .expect("standard allocation must sum to 100")
}

fn products(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_standard() -> Result<ProfileCatalog, crate::domain::foundation::CatalogError> {
    ProfileCatalog::new(vec![
        ProfileBand {
            upper_bound: Some(20.0),
            profile: RiskProfile {
                tier: RiskTier::VeryConservative,
                description: "Capital preservation comes first. Returns are secondary \
                              to keeping the principal safe and accessible."
                    .to_string(),
                allocation: allocation(10, 60, 10, 20),
                products: products(&[
                    "Fixed deposits",
                    "Liquid funds",
                    "Short-duration debt funds",
                ]),
                color: "#16A34A".to_string(),
            },
        },
        ProfileBand {
            upper_bound: Some(35.0),
            profile: RiskProfile {
                tier: RiskTier::Conservative,
                description: "Mostly stable assets with a small equity sleeve for \
                              gradual growth ahead of inflation."
                    .to_string(),
                allocation: allocation(25, 50, 15, 10),
                products: products(&[
                    "Conservative hybrid funds",
                    "Corporate bond funds",
                    "Gold savings funds",
                ]),
                color: "#65A30D".to_string(),
            },
        },
        ProfileBand {
            upper_bound: Some(50.0),
            profile: RiskProfile {
                tier: RiskTier::Moderate,
                description: "An even balance of growth and stability, accepting \
                              moderate swings for better long-term returns."
                    .to_string(),
                allocation: allocation(40, 40, 10, 10),
                products: products(&[
                    "Balanced advantage funds",
                    "Large-cap index funds",
                    "Medium-duration debt funds",
                ]),
                color: "#CA8A04".to_string(),
            },
        },
        ProfileBand {
            upper_bound: Some(65.0),
            profile: RiskProfile {
                tier: RiskTier::ModeratelyAggressive,
                description: "Growth-oriented with a meaningful equity majority, \
                              cushioned by debt and gold."
                    .to_string(),
                allocation: allocation(55, 30, 10, 5),
                products: products(&[
                    "Flexi-cap funds",
                    "Large and mid-cap funds",
                    "Aggressive hybrid funds",
                ]),
                color: "#EA580C".to_string(),
            },
        },
        ProfileBand {
            upper_bound: Some(80.0),
            profile: RiskProfile {
                tier: RiskTier::Aggressive,
                description: "Equity-heavy for long-horizon growth, comfortable with \
                              sharp interim drawdowns."
                    .to_string(),
                allocation: allocation(70, 20, 5, 5),
                products: products(&[
                    "Mid-cap funds",
                    "Flexi-cap funds",
                    "International equity funds",
                ]),
                color: "#DC2626".to_string(),
            },
        },
        ProfileBand {
            upper_bound: None,
            profile: RiskProfile {
                tier: RiskTier::VeryAggressive,
                description: "Maximum growth orientation. High volatility is the \
                              accepted price of the highest expected returns."
                    .to_string(),
                allocation: allocation(85, 10, 0, 5),
                products: products(&[
                    "Small-cap funds",
                    "Sectoral and thematic funds",
                    "Mid-cap funds",
                ]),
                color: "#991B1B".to_string(),
            },
        },
    ])
}
