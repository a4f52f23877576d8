//! Chain state snapshot with fan-out refresh.
//!
//! The supply counters, four phase flags, and two cost reads are
//! independent queries against the chain; together they form an
//! eventually-consistent snapshot. A refresh fans all of them out
//! concurrently and joins them into one immutable state object, so one
//! slow or failing read never blocks or poisons the others.

use anyhow::Result;
use tracing::warn;

use mint_chain::reader::ChainStateReader;
use mint_types::phase::{MintPhase, PhaseFlags};
use mint_types::supply::SupplyCounters;

use crate::phase::resolve_phase;

/// One refresh cycle's view of the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSnapshot {
    pub supply: SupplyCounters,
    pub flags: PhaseFlags,
    pub wl_cost_wei: u128,
    pub public_cost_wei: u128,
}

/// A failed read keeps the previous value for that field only.
fn settle<T>(field: &'static str, result: Result<T>, previous: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("chain read '{}' failed, keeping last value: {:#}", field, e);
            previous
        }
    }
}

impl ChainSnapshot {
    /// The authoritative phase for this snapshot.
    pub fn phase(&self) -> MintPhase {
        resolve_phase(self.flags)
    }

    /// Fan out every read concurrently and settle into a new snapshot.
    ///
    /// `wallet` drives the per-wallet mint count; with no wallet connected
    /// that counter is zero. Each field falls back to its value in
    /// `previous` when its read fails.
    pub async fn refresh(
        reader: &dyn ChainStateReader,
        wallet: Option<&str>,
        previous: &ChainSnapshot,
    ) -> ChainSnapshot {
        let number_minted = async {
            match wallet {
                Some(address) => reader.get_number_minted(address).await,
                None => Ok(0),
            }
        };

        let (
            max_supply,
            total_minted,
            number_minted,
            paused,
            airdrop_active,
            whitelist_active,
            public_sale_active,
            wl_cost,
            public_cost,
        ) = futures::join!(
            reader.get_max_supply(),
            reader.get_total_minted(),
            number_minted,
            reader.is_paused_state(),
            reader.is_airdrop_state(),
            reader.is_wl_mint_state(),
            reader.is_public_sale_state(),
            reader.get_wl_cost(),
            reader.get_public_cost(),
        );

        ChainSnapshot {
            supply: SupplyCounters {
                max_supply: settle("max_supply", max_supply, previous.supply.max_supply),
                total_minted: settle("total_minted", total_minted, previous.supply.total_minted),
                number_minted: settle(
                    "number_minted",
                    number_minted,
                    previous.supply.number_minted,
                ),
            },
            flags: PhaseFlags {
                paused: settle("paused", paused, previous.flags.paused),
                airdrop_active: settle("airdrop", airdrop_active, previous.flags.airdrop_active),
                whitelist_active: settle(
                    "wl_mint",
                    whitelist_active,
                    previous.flags.whitelist_active,
                ),
                public_sale_active: settle(
                    "public_sale",
                    public_sale_active,
                    previous.flags.public_sale_active,
                ),
            },
            wl_cost_wei: settle("wl_cost", wl_cost, previous.wl_cost_wei),
            public_cost_wei: settle("public_cost", public_cost, previous.public_cost_wei),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_chain::mock::{ChainRead, MockChainReader};

    #[tokio::test]
    async fn test_refresh_populates_all_fields() {
        let reader = MockChainReader::new();
        reader.set_supply(12, 100);
        reader.set_number_minted(3);
        reader.set_flags(PhaseFlags {
            public_sale_active: true,
            ..PhaseFlags::default()
        });

        let snapshot =
            ChainSnapshot::refresh(&reader, Some("0xabc"), &ChainSnapshot::default()).await;
        assert_eq!(snapshot.supply.total_minted, 12);
        assert_eq!(snapshot.supply.max_supply, 100);
        assert_eq!(snapshot.supply.number_minted, 3);
        assert_eq!(snapshot.phase(), MintPhase::PublicSale);
        assert_eq!(snapshot.public_cost_wei, 80_000_000_000_000_000);
    }

    #[tokio::test]
    async fn test_failed_read_keeps_last_value_without_blocking_others() {
        let reader = MockChainReader::new();
        reader.set_supply(12, 100);
        reader.set_flags(PhaseFlags {
            whitelist_active: true,
            ..PhaseFlags::default()
        });

        let first = ChainSnapshot::refresh(&reader, None, &ChainSnapshot::default()).await;
        assert_eq!(first.supply.total_minted, 12);

        // total_minted starts failing; the chain keeps moving elsewhere
        reader.fail(ChainRead::TotalMinted);
        reader.set_supply(40, 100);
        reader.set_costs(60_000_000_000_000_000, 90_000_000_000_000_000);

        let second = ChainSnapshot::refresh(&reader, None, &first).await;
        // The failed field holds its last-known value...
        assert_eq!(second.supply.total_minted, 12);
        // ...while every other field is fresh
        assert_eq!(second.supply.max_supply, 100);
        assert_eq!(second.wl_cost_wei, 60_000_000_000_000_000);
        assert_eq!(second.phase(), MintPhase::Whitelist);
    }

    #[tokio::test]
    async fn test_no_wallet_means_zero_number_minted() {
        let reader = MockChainReader::new();
        reader.set_number_minted(7);

        let snapshot =
            ChainSnapshot::refresh(&reader, None, &ChainSnapshot::default()).await;
        assert_eq!(snapshot.supply.number_minted, 0);
    }
}
