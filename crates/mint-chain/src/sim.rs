//! Local simulated chain backend.
//!
//! `SimulatedChain` implements both collaborator traits against an
//! in-memory state that can be persisted as a JSON file. The CLI uses it to
//! rehearse a drop end to end - flipping phase flags, minting, watching
//! supply move - without a node or a funded wallet.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mint_types::address::normalize_address;
use mint_types::fsio::{atomic_write_json, read_json_opt};
use mint_types::phase::PhaseFlags;

use crate::reader::ChainStateReader;
use crate::writer::{ChainWriter, TxReceipt};

/// Persistable state of the simulated drop contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimChainState {
    pub flags: PhaseFlags,
    pub max_supply: u64,
    pub total_minted: u64,
    /// Per-wallet mint counts, canonical addresses.
    pub minted_by: BTreeMap<String, u64>,
    pub wl_cost_wei: u128,
    pub public_cost_wei: u128,
}

impl Default for SimChainState {
    fn default() -> Self {
        Self {
            flags: PhaseFlags::default(),
            max_supply: 10_000,
            total_minted: 0,
            minted_by: BTreeMap::new(),
            wl_cost_wei: 50_000_000_000_000_000,  // 0.05 ETH
            public_cost_wei: 80_000_000_000_000_000, // 0.08 ETH
        }
    }
}

/// A drop contract simulation with JSON-file persistence.
pub struct SimulatedChain {
    state: RwLock<SimChainState>,
    /// Wallet the writer attributes mints to, when one is connected.
    active_wallet: RwLock<Option<String>>,
}

impl SimulatedChain {
    pub fn new(state: SimChainState) -> Self {
        Self {
            state: RwLock::new(state),
            active_wallet: RwLock::new(None),
        }
    }

    /// Load state from a file, or start fresh if none exists.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        let state = read_json_opt::<SimChainState>(path)?.unwrap_or_default();
        Ok(Self::new(state))
    }

    /// Persist the current state.
    pub fn save(&self, path: &Path) -> Result<()> {
        atomic_write_json(path, &*self.state.read())
    }

    /// Snapshot of the raw state, for display and tests.
    pub fn state(&self) -> SimChainState {
        self.state.read().clone()
    }

    /// Bind mint writes to a wallet address.
    pub fn set_active_wallet(&self, address: Option<&str>) {
        *self.active_wallet.write() =
            address.map(normalize_address);
    }

    /// Replace the phase flags wholesale.
    pub fn set_flags(&self, flags: PhaseFlags) {
        self.state.write().flags = flags;
    }

    /// Mutate the state in place (CLI phase/cost editing).
    pub fn with_state_mut<R>(&self, f: impl FnOnce(&mut SimChainState) -> R) -> R {
        f(&mut self.state.write())
    }

    fn fulfill(&self, kind: &str, active: bool, quantity: u32) -> Result<TxReceipt> {
        if quantity == 0 {
            return Ok(TxReceipt {
                success: false,
                status: "Quantity must be at least 1".to_string(),
            });
        }
        let mut state = self.state.write();
        if state.flags.paused {
            return Ok(TxReceipt {
                success: false,
                status: "Minting is paused".to_string(),
            });
        }
        if !active {
            return Ok(TxReceipt {
                success: false,
                status: format!("The {} phase is not active", kind),
            });
        }
        let remaining = state.max_supply.saturating_sub(state.total_minted);
        if u64::from(quantity) > remaining {
            return Ok(TxReceipt {
                success: false,
                status: format!("Only {} token(s) left", remaining),
            });
        }
        state.total_minted += u64::from(quantity);
        if let Some(wallet) = self.active_wallet.read().clone() {
            *state.minted_by.entry(wallet).or_insert(0) += u64::from(quantity);
        }
        debug!(kind, quantity, total = state.total_minted, "sim mint fulfilled");
        Ok(TxReceipt {
            success: true,
            status: format!("Minted {} token(s) in the {} phase", quantity, kind),
        })
    }
}

#[async_trait::async_trait]
impl ChainStateReader for SimulatedChain {
    async fn get_max_supply(&self) -> Result<u64> {
        Ok(self.state.read().max_supply)
    }

    async fn get_total_minted(&self) -> Result<u64> {
        Ok(self.state.read().total_minted)
    }

    async fn get_number_minted(&self, address: &str) -> Result<u64> {
        let canonical = normalize_address(address);
        Ok(self
            .state
            .read()
            .minted_by
            .get(&canonical)
            .copied()
            .unwrap_or(0))
    }

    async fn is_paused_state(&self) -> Result<bool> {
        Ok(self.state.read().flags.paused)
    }

    async fn is_airdrop_state(&self) -> Result<bool> {
        Ok(self.state.read().flags.airdrop_active)
    }

    async fn is_wl_mint_state(&self) -> Result<bool> {
        Ok(self.state.read().flags.whitelist_active)
    }

    async fn is_public_sale_state(&self) -> Result<bool> {
        Ok(self.state.read().flags.public_sale_active)
    }

    async fn get_wl_cost(&self) -> Result<u128> {
        Ok(self.state.read().wl_cost_wei)
    }

    async fn get_public_cost(&self) -> Result<u128> {
        Ok(self.state.read().public_cost_wei)
    }
}

#[async_trait::async_trait]
impl ChainWriter for SimulatedChain {
    async fn submit_whitelist_mint(&self, quantity: u32) -> Result<TxReceipt> {
        let active = self.state.read().flags.whitelist_active;
        self.fulfill("whitelist", active, quantity)
    }

    async fn submit_public_mint(&self, quantity: u32) -> Result<TxReceipt> {
        let active = self.state.read().flags.public_sale_active;
        self.fulfill("public sale", active, quantity)
    }

    async fn submit_airdrop(&self, quantity: u32) -> Result<TxReceipt> {
        let active = self.state.read().flags.airdrop_active;
        self.fulfill("airdrop", active, quantity)
    }
}
