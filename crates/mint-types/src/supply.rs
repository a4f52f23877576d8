//! Collection supply counters.

use serde::{Deserialize, Serialize};

/// Supply state of the collection, refreshed as one unit per refresh cycle.
///
/// `total_minted <= max_supply` holds whenever the chain is behaving;
/// counters are never mutated locally except by a full refresh.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyCounters {
    /// Tokens minted across all wallets.
    pub total_minted: u64,
    /// Hard cap of the collection.
    pub max_supply: u64,
    /// Tokens minted by the connected wallet.
    pub number_minted: u64,
}

impl SupplyCounters {
    /// Tokens still available to mint.
    pub fn remaining(&self) -> u64 {
        self.max_supply.saturating_sub(self.total_minted)
    }

    /// True when the collection is fully minted out.
    pub fn is_sold_out(&self) -> bool {
        self.total_minted >= self.max_supply && self.max_supply > 0
    }

    /// Mint progress in percent, for the storefront progress bar.
    pub fn percent_minted(&self) -> f64 {
        if self.max_supply == 0 {
            return 0.0;
        }
        (self.total_minted as f64 / self.max_supply as f64) * 100.0
    }
}

impl Default for SupplyCounters {
    fn default() -> Self {
        Self {
            total_minted: 0,
            max_supply: 0,
            number_minted: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let supply = SupplyCounters {
            total_minted: 30,
            max_supply: 100,
            number_minted: 2,
        };
        assert_eq!(supply.remaining(), 70);
        assert!(!supply.is_sold_out());
    }

    #[test]
    fn test_sold_out() {
        let supply = SupplyCounters {
            total_minted: 100,
            max_supply: 100,
            number_minted: 5,
        };
        assert_eq!(supply.remaining(), 0);
        assert!(supply.is_sold_out());
    }

    #[test]
    fn test_percent_minted_zero_supply() {
        let supply = SupplyCounters::default();
        assert_eq!(supply.percent_minted(), 0.0);
    }
}
