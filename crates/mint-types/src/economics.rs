//! Phase economics: per-unit cost and per-wallet ceilings.

use serde::{Deserialize, Serialize};

use crate::phase::MintPhase;

/// Configured per-wallet ceilings for each actionable phase.
///
/// These are deployment configuration, not chain reads; the contract
/// enforces its own limits independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintLimits {
    /// Ceiling during the airdrop window.
    pub airdrop: u32,
    /// Ceiling during whitelist minting.
    pub whitelist: u32,
    /// Ceiling during public sale.
    pub public: u32,
}

impl Default for MintLimits {
    fn default() -> Self {
        Self {
            airdrop: 1,
            whitelist: 2,
            public: 5,
        }
    }
}

impl MintLimits {
    /// The ceiling that applies to a phase.
    ///
    /// Closed phases fall back to the public ceiling so a rendered quantity
    /// selector stays within a sane range while the sale is closed.
    pub fn ceiling_for(&self, phase: MintPhase) -> u32 {
        match phase {
            MintPhase::Airdrop => self.airdrop,
            MintPhase::Whitelist => self.whitelist,
            MintPhase::PublicSale | MintPhase::Paused | MintPhase::NotOpen => self.public,
        }
    }
}

/// The active economics of the current phase.
///
/// Recomputed whenever the phase or wallet changes; never cached across a
/// phase transition, since whitelist and public pricing are independent
/// chain reads and may legitimately differ mid-session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseEconomics {
    /// The phase these economics belong to.
    pub phase: MintPhase,
    /// Cost of one token in wei.
    pub cost_per_unit_wei: u128,
    /// Maximum quantity one wallet may mint in this phase.
    pub max_per_wallet: u32,
}

impl PhaseEconomics {
    /// Total price of a quantity at the current per-unit cost.
    pub fn total_price_wei(&self, quantity: u32) -> u128 {
        self.cost_per_unit_wei.saturating_mul(quantity as u128)
    }
}

/// A purchase request, constructed immediately before submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MintRequest {
    /// Requested quantity, already clamped to `[1, max_per_wallet]`.
    pub quantity: u32,
    /// The phase the request was built under.
    pub phase: MintPhase,
}
