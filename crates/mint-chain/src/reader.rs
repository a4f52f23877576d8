//! Read-only chain state queries.

use anyhow::Result;

/// Read-only queries against the drop contract.
///
/// Each method is an independent asynchronous query; callers fan them out
/// concurrently and tolerate individual failures, so implementations should
/// not share failure state between methods.
///
/// ## Implementation Notes
///
/// Implementations should be stateless where possible. Connection state
/// should use lazy initialization so the reader can sit behind an `Arc`
/// shared across refresh cycles.
#[async_trait::async_trait]
pub trait ChainStateReader: Send + Sync {
    /// Hard cap of the collection.
    async fn get_max_supply(&self) -> Result<u64>;

    /// Tokens minted across all wallets.
    async fn get_total_minted(&self) -> Result<u64>;

    /// Tokens minted by one wallet.
    async fn get_number_minted(&self, address: &str) -> Result<u64>;

    /// Whether the operator has paused minting.
    async fn is_paused_state(&self) -> Result<bool>;

    /// Whether the airdrop window is open.
    async fn is_airdrop_state(&self) -> Result<bool>;

    /// Whether whitelist minting is open.
    async fn is_wl_mint_state(&self) -> Result<bool>;

    /// Whether the public sale is open.
    async fn is_public_sale_state(&self) -> Result<bool>;

    /// Whitelist per-unit cost in wei.
    async fn get_wl_cost(&self) -> Result<u128>;

    /// Public sale per-unit cost in wei.
    async fn get_public_cost(&self) -> Result<u128>;
}
