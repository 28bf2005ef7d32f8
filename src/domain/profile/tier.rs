//! Risk tier - The six ordered profile classifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk-profile tier, ordered by increasing aggressiveness.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    VeryConservative,
    Conservative,
    Moderate,
    ModeratelyAggressive,
    Aggressive,
    VeryAggressive,
}

impl RiskTier {
    /// All tiers in ascending order of aggressiveness.
    pub const ALL: [RiskTier; 6] = [
        RiskTier::VeryConservative,
        RiskTier::Conservative,
        RiskTier::Moderate,
        RiskTier::ModeratelyAggressive,
        RiskTier::Aggressive,
        RiskTier::VeryAggressive,
    ];

    /// Returns the display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::VeryConservative => "Very Conservative",
            RiskTier::Conservative => "Conservative",
            RiskTier::Moderate => "Moderate",
            RiskTier::ModeratelyAggressive => "Moderately Aggressive",
            RiskTier::Aggressive => "Aggressive",
            RiskTier::VeryAggressive => "Very Aggressive",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_aggressiveness() {
        assert!(RiskTier::VeryConservative < RiskTier::Conservative);
        assert!(RiskTier::Moderate < RiskTier::ModeratelyAggressive);
        assert!(RiskTier::Aggressive < RiskTier::VeryAggressive);
    }

    #[test]
    fn tier_display_matches_label() {
        assert_eq!(format!("{}", RiskTier::VeryConservative), "Very Conservative");
        assert_eq!(
            format!("{}", RiskTier::ModeratelyAggressive),
            "Moderately Aggressive"
        );
    }

    #[test]
    fn tier_serializes_to_snake_case() {
        let json = serde_json::to_string(&RiskTier::VeryAggressive).unwrap();
        assert_eq!(json, "\"very_aggressive\"");
    }

    #[test]
    fn all_lists_six_tiers_ascending() {
        assert_eq!(RiskTier::ALL.len(), 6);
        assert!(RiskTier::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
