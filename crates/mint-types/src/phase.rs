//! Sale phase types.
//!
//! The drop contract exposes four independent booleans (paused, airdrop,
//! whitelist, public sale). [`PhaseFlags`] carries those raw reads;
//! [`MintPhase`] is the single authoritative phase derived from them.
//! Resolution lives in `mint-controller`; the types live here so the chain
//! and session crates can speak about phases without depending on the core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The authoritative sale phase of the drop.
///
/// Exactly one phase is active at any time. `NotOpen` is the state where no
/// contract flag is asserted at all - the sale has not started yet. It is
/// presented to users the same way as `Paused`, but stays a distinct variant
/// so callers can tell "operator paused the sale" from "sale never opened".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MintPhase {
    /// The operator has paused all minting.
    Paused,
    /// Airdrop distribution window.
    Airdrop,
    /// Whitelist-only minting.
    Whitelist,
    /// Open public sale.
    PublicSale,
    /// No phase flag asserted; the sale has not opened yet.
    NotOpen,
}

impl MintPhase {
    /// True when no mint can be submitted in this phase.
    pub fn is_closed(&self) -> bool {
        matches!(self, MintPhase::Paused | MintPhase::NotOpen)
    }

    /// True when a mint submission is legal in this phase.
    pub fn is_actionable(&self) -> bool {
        !self.is_closed()
    }

    /// The storefront badge label for an actionable phase.
    ///
    /// Closed phases have no fixed label; their text comes from the
    /// operator-editable status setting.
    pub fn storefront_label(&self) -> Option<&'static str> {
        match self {
            MintPhase::Airdrop => Some("Airdrop Live"),
            MintPhase::Whitelist => Some("Whitelist"),
            MintPhase::PublicSale => Some("Public Sale"),
            MintPhase::Paused | MintPhase::NotOpen => None,
        }
    }
}

impl fmt::Display for MintPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MintPhase::Paused => "paused",
            MintPhase::Airdrop => "airdrop",
            MintPhase::Whitelist => "whitelist",
            MintPhase::PublicSale => "public-sale",
            MintPhase::NotOpen => "not-open",
        };
        f.write_str(name)
    }
}

/// Raw phase flags as read from the chain in one refresh cycle.
///
/// The four reads are independent queries; nothing guarantees mutual
/// exclusivity at this layer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseFlags {
    pub paused: bool,
    pub airdrop_active: bool,
    pub whitelist_active: bool,
    pub public_sale_active: bool,
}
