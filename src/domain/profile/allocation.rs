//! Asset allocation value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CatalogError;

/// Target allocation percentages across the four asset classes.
///
/// The four shares must sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub equity: u8,
    pub debt: u8,
    pub gold: u8,
    pub cash: u8,
}

impl AssetAllocation {
    /// Creates a new allocation, validating the sum.
    pub fn new(equity: u8, debt: u8, gold: u8, cash: u8) -> Result<Self, CatalogError> {
        let sum = equity as u16 + debt as u16 + gold as u16 + cash as u16;
        if sum != 100 {
            return Err(CatalogError::AllocationSum { sum });
        }
        Ok(Self {
            equity,
            debt,
            gold,
            cash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_accepts_sum_of_100() {
        let allocation = AssetAllocation::new(40, 40, 10, 10).unwrap();
        assert_eq!(allocation.equity, 40);
        assert_eq!(allocation.cash, 10);
    }

    #[test]
    fn allocation_rejects_sum_below_100() {
        let result = AssetAllocation::new(40, 40, 10, 5);
        assert!(matches!(result, Err(CatalogError::AllocationSum { sum: 95 })));
    }

    #[test]
    fn allocation_rejects_sum_above_100() {
        let result = AssetAllocation::new(50, 50, 10, 10);
        assert!(matches!(result, Err(CatalogError::AllocationSum { sum: 120 })));
    }

    #[test]
    fn allocation_allows_zero_components() {
        assert!(AssetAllocation::new(85, 10, 0, 5).is_ok());
    }
}
