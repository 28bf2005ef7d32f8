//! Profile metadata and the banded profile catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CatalogError, Percentage};

use super::allocation::AssetAllocation;
use super::defaults;
use super::tier::RiskTier;

/// Static metadata for one risk-profile tier.
///
/// Attached verbatim to results; allocation is never computed dynamically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub tier: RiskTier,
    /// Narrative description shown alongside the result.
    pub description: String,
    pub allocation: AssetAllocation,
    /// Representative product recommendations.
    pub products: Vec<String>,
    /// Display color token for the UI.
    pub color: String,
}

/// One band of the profile catalog: an inclusive upper percentage bound
/// and the profile it selects. The final band is open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBand {
    /// Inclusive upper bound; `None` marks the open-ended final band.
    pub upper_bound: Option<f64>,
    pub profile: RiskProfile,
}

/// Ordered catalog of profile bands.
///
/// Bands are walked in order with inclusive upper bounds, first match
/// wins. Construction rejects non-ascending thresholds, an open band
/// anywhere but last, or a bounded final band.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileCatalog {
    bands: Vec<ProfileBand>,
}

impl ProfileCatalog {
    /// Creates a catalog from ordered bands.
    pub fn new(bands: Vec<ProfileBand>) -> Result<Self, CatalogError> {
        if bands.is_empty() {
            return Err(CatalogError::EmptyProfileCatalog);
        }

        let last = bands.len() - 1;
        let mut prev: Option<f64> = None;
        for (index, band) in bands.iter().enumerate() {
            match band.upper_bound {
                Some(bound) => {
                    if index == last {
                        return Err(CatalogError::BoundedFinalBand);
                    }
                    if let Some(prev_bound) = prev {
                        if bound <= prev_bound {
                            return Err(CatalogError::NonAscendingThresholds {
                                prev: prev_bound,
                                next: bound,
                            });
                        }
                    }
                    prev = Some(bound);
                }
                None => {
                    if index != last {
                        return Err(CatalogError::NonFinalOpenBand);
                    }
                }
            }
        }

        Ok(Self { bands })
    }

    /// The standard six-tier catalog, cached for the process lifetime.
    pub fn standard() -> &'static Self {
        defaults::standard_profiles()
    }

    /// Returns the bands in ascending order.
    pub fn bands(&self) -> &[ProfileBand] {
        &self.bands
    }

    /// Selects the profile for a percentage score.
    ///
    /// Inclusive upper bounds, first match wins; the open-ended final
    /// band catches everything above the last threshold.
    pub fn profile_for(&self, percentage: Percentage) -> &RiskProfile {
        for band in &self.bands {
            match band.upper_bound {
                Some(bound) if percentage.value() <= bound => return &band.profile,
                Some(_) => continue,
                None => return &band.profile,
            }
        }
        // Unreachable for a validated catalog; the last band is open.
        &self.bands[self.bands.len() - 1].profile
    }
}
