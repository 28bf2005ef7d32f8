//! Risk profiles - Tiers, asset allocations, and the profile catalog.

mod allocation;
mod defaults;
mod profile;
mod tier;

pub use allocation::AssetAllocation;
pub use profile::{ProfileBand, ProfileCatalog, RiskProfile};
pub use tier::RiskTier;
