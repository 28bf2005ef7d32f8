//! Risk result - The computed output of one classification.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Category;
use crate::domain::foundation::Percentage;
use crate::domain::profile::{RiskProfile, RiskTier};

/// Score and maximum accumulated for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    /// Weighted score accumulated by this category's questions.
    pub score: u32,
    /// Weighted maximum for this category's questions.
    pub max_score: u32,
    pub percentage: Percentage,
}

/// The computed classification, produced fresh on every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Raw weighted total over all questions.
    pub total_score: u32,
    /// Weighted maximum for the full catalog, independent of answers.
    pub max_possible_score: u32,
    pub percentage: Percentage,
    pub tier: RiskTier,
    /// Static profile metadata for the matched tier, echoed verbatim.
    pub profile: RiskProfile,
    /// Per-category subtotals, in a fixed category order.
    pub categories: Vec<CategoryBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ProfileCatalog;

    #[test]
    fn result_serializes_to_json() {
        let profile = ProfileCatalog::standard()
            .profile_for(Percentage::new(40.0))
            .clone();
        let result = RiskResult {
            total_score: 104,
            max_possible_score: 260,
            percentage: Percentage::new(40.0),
            tier: profile.tier,
            profile,
            categories: vec![CategoryBreakdown {
                category: Category::RiskTolerance,
                score: 30,
                max_score: 70,
                percentage: Percentage::new(30.0 / 70.0 * 100.0),
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_score"], 104);
        assert_eq!(json["tier"], "moderate");
        assert_eq!(json["profile"]["allocation"]["equity"], 40);
        assert_eq!(json["categories"][0]["category"], "risk_tolerance");
    }
}
