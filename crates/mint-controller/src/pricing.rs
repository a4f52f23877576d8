//! Per-phase cost and ceiling selection.

use mint_types::economics::{MintLimits, PhaseEconomics};
use mint_types::phase::MintPhase;

use crate::snapshot::ChainSnapshot;

/// Select the active economics for a phase.
///
/// Whitelist takes the whitelist cost read; the airdrop is free; everything
/// else prices at the public cost. Whitelist and public pricing are
/// independent reads that may legitimately differ mid-session, so this is
/// recomputed from the snapshot every time the phase changes - stale
/// economics must never survive a phase flip.
pub fn resolve_economics(
    phase: MintPhase,
    snapshot: &ChainSnapshot,
    limits: &MintLimits,
) -> PhaseEconomics {
    let cost_per_unit_wei = match phase {
        MintPhase::Airdrop => 0,
        MintPhase::Whitelist => snapshot.wl_cost_wei,
        MintPhase::PublicSale | MintPhase::Paused | MintPhase::NotOpen => snapshot.public_cost_wei,
    };
    PhaseEconomics {
        phase,
        cost_per_unit_wei,
        max_per_wallet: limits.ceiling_for(phase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ChainSnapshot {
        ChainSnapshot {
            wl_cost_wei: 50_000_000_000_000_000,
            public_cost_wei: 80_000_000_000_000_000,
            ..ChainSnapshot::default()
        }
    }

    #[test]
    fn test_whitelist_economics() {
        let economics = resolve_economics(MintPhase::Whitelist, &snapshot(), &MintLimits::default());
        assert_eq!(economics.cost_per_unit_wei, 50_000_000_000_000_000);
        assert_eq!(economics.max_per_wallet, 2);
    }

    #[test]
    fn test_public_economics() {
        let economics =
            resolve_economics(MintPhase::PublicSale, &snapshot(), &MintLimits::default());
        assert_eq!(economics.cost_per_unit_wei, 80_000_000_000_000_000);
        assert_eq!(economics.max_per_wallet, 5);
    }

    #[test]
    fn test_airdrop_is_free() {
        let economics = resolve_economics(MintPhase::Airdrop, &snapshot(), &MintLimits::default());
        assert_eq!(economics.cost_per_unit_wei, 0);
        assert_eq!(economics.max_per_wallet, 1);
    }

    #[test]
    fn test_phase_flip_changes_economics() {
        // Prices that differ between the two reads must follow the phase
        let snapshot = snapshot();
        let limits = MintLimits::default();
        let whitelist = resolve_economics(MintPhase::Whitelist, &snapshot, &limits);
        let public = resolve_economics(MintPhase::PublicSale, &snapshot, &limits);
        assert_ne!(whitelist.cost_per_unit_wei, public.cost_per_unit_wei);
        assert_ne!(whitelist.max_per_wallet, public.max_per_wallet);
    }
}
