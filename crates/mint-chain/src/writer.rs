//! Phase-specific mint write calls.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Receipt returned by a mint write call.
///
/// `success:false` with a status is a chain-level rejection (sold out,
/// wrong phase, over the wallet limit); transport failures surface as
/// `Err` instead and are normalized by the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub success: bool,
    pub status: String,
}

/// The three phase-specific purchase calls exposed by the drop contract.
///
/// Quantity is the only argument; the sender is whatever wallet the
/// underlying signer is bound to. Implementations must always resolve -
/// a call that can hang forever breaks the executor's terminal-outcome
/// guarantee.
#[async_trait::async_trait]
pub trait ChainWriter: Send + Sync {
    /// Mint during the whitelist window.
    async fn submit_whitelist_mint(&self, quantity: u32) -> Result<TxReceipt>;

    /// Mint during the public sale.
    async fn submit_public_mint(&self, quantity: u32) -> Result<TxReceipt>;

    /// Claim from the airdrop allocation.
    async fn submit_airdrop(&self, quantity: u32) -> Result<TxReceipt>;
}
