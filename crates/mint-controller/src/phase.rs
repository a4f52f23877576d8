//! Phase resolution.

use mint_types::phase::{MintPhase, PhaseFlags};

/// Resolve the raw flag set into the single authoritative phase.
///
/// Precedence is fixed: paused overrides everything, then airdrop, then
/// whitelist, then public sale. Nothing asserted resolves to
/// [`MintPhase::NotOpen`]. The chain should never assert whitelist and
/// public sale together, but if it does, whitelist wins - the resolver
/// must produce exactly one phase for every input.
///
/// Resolution is pure and re-run on every state refresh; no transition is
/// time-based.
pub fn resolve_phase(flags: PhaseFlags) -> MintPhase {
    if flags.paused {
        MintPhase::Paused
    } else if flags.airdrop_active {
        MintPhase::Airdrop
    } else if flags.whitelist_active {
        MintPhase::Whitelist
    } else if flags.public_sale_active {
        MintPhase::PublicSale
    } else {
        MintPhase::NotOpen
    }
}
