//! Mock collaborators for testing.
//!
//! Use these in tests to avoid a live backend and to script specific
//! scenarios: individual read failures, chain-level mint rejections,
//! transport errors, held-open writes for concurrency tests, and wallet
//! selection cancellation.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use tokio::sync::Notify;

use mint_types::phase::PhaseFlags;

use crate::reader::ChainStateReader;
use crate::wallet::{NetworkCheck, ProviderSession, WalletProvider};
use crate::writer::{ChainWriter, TxReceipt};

/// Identifies one of the independent chain reads, for failure injection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChainRead {
    MaxSupply,
    TotalMinted,
    NumberMinted,
    Paused,
    Airdrop,
    WlMint,
    PublicSale,
    WlCost,
    PublicCost,
}

#[derive(Debug, Clone)]
struct MockValues {
    max_supply: u64,
    total_minted: u64,
    number_minted: u64,
    flags: PhaseFlags,
    wl_cost_wei: u128,
    public_cost_wei: u128,
}

/// A scriptable [`ChainStateReader`].
///
/// # Example
///
/// ```
/// use mint_chain::mock::{ChainRead, MockChainReader};
/// use mint_chain::ChainStateReader;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let reader = MockChainReader::new();
/// reader.set_supply(10, 100);
/// reader.fail(ChainRead::TotalMinted);
///
/// assert_eq!(reader.get_max_supply().await.unwrap(), 100);
/// assert!(reader.get_total_minted().await.is_err());
/// # });
/// ```
pub struct MockChainReader {
    values: Mutex<MockValues>,
    failing: Mutex<HashSet<ChainRead>>,
}

impl MockChainReader {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(MockValues {
                max_supply: 100,
                total_minted: 0,
                number_minted: 0,
                flags: PhaseFlags::default(),
                wl_cost_wei: 50_000_000_000_000_000,
                public_cost_wei: 80_000_000_000_000_000,
            }),
            failing: Mutex::new(HashSet::new()),
        }
    }

    pub fn set_flags(&self, flags: PhaseFlags) {
        self.values.lock().flags = flags;
    }

    pub fn set_supply(&self, total_minted: u64, max_supply: u64) {
        let mut values = self.values.lock();
        values.total_minted = total_minted;
        values.max_supply = max_supply;
    }

    pub fn set_number_minted(&self, number_minted: u64) {
        self.values.lock().number_minted = number_minted;
    }

    pub fn set_costs(&self, wl_cost_wei: u128, public_cost_wei: u128) {
        let mut values = self.values.lock();
        values.wl_cost_wei = wl_cost_wei;
        values.public_cost_wei = public_cost_wei;
    }

    /// Make one read fail until cleared.
    pub fn fail(&self, read: ChainRead) {
        self.failing.lock().insert(read);
    }

    pub fn clear_failures(&self) {
        self.failing.lock().clear();
    }

    fn guard(&self, read: ChainRead) -> Result<()> {
        if self.failing.lock().contains(&read) {
            return Err(anyhow!("mock read failure: {:?}", read));
        }
        Ok(())
    }
}

impl Default for MockChainReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChainStateReader for MockChainReader {
    async fn get_max_supply(&self) -> Result<u64> {
        self.guard(ChainRead::MaxSupply)?;
        Ok(self.values.lock().max_supply)
    }

    async fn get_total_minted(&self) -> Result<u64> {
        self.guard(ChainRead::TotalMinted)?;
        Ok(self.values.lock().total_minted)
    }

    async fn get_number_minted(&self, _address: &str) -> Result<u64> {
        self.guard(ChainRead::NumberMinted)?;
        Ok(self.values.lock().number_minted)
    }

    async fn is_paused_state(&self) -> Result<bool> {
        self.guard(ChainRead::Paused)?;
        Ok(self.values.lock().flags.paused)
    }

    async fn is_airdrop_state(&self) -> Result<bool> {
        self.guard(ChainRead::Airdrop)?;
        Ok(self.values.lock().flags.airdrop_active)
    }

    async fn is_wl_mint_state(&self) -> Result<bool> {
        self.guard(ChainRead::WlMint)?;
        Ok(self.values.lock().flags.whitelist_active)
    }

    async fn is_public_sale_state(&self) -> Result<bool> {
        self.guard(ChainRead::PublicSale)?;
        Ok(self.values.lock().flags.public_sale_active)
    }

    async fn get_wl_cost(&self) -> Result<u128> {
        self.guard(ChainRead::WlCost)?;
        Ok(self.values.lock().wl_cost_wei)
    }

    async fn get_public_cost(&self) -> Result<u128> {
        self.guard(ChainRead::PublicCost)?;
        Ok(self.values.lock().public_cost_wei)
    }
}

/// Which write call a [`MockChainWriter`] recorded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MintKind {
    Airdrop,
    Whitelist,
    Public,
}

enum MockResponse {
    Receipt(TxReceipt),
    Error(String),
}

/// A recording [`ChainWriter`] with a scriptable response.
pub struct MockChainWriter {
    calls: Mutex<Vec<(MintKind, u32)>>,
    response: Mutex<MockResponse>,
    hold: Mutex<Option<Arc<Notify>>>,
}

impl MockChainWriter {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Mutex::new(MockResponse::Receipt(TxReceipt {
                success: true,
                status: "Mint confirmed".to_string(),
            })),
            hold: Mutex::new(None),
        }
    }

    /// Script the receipt every call returns.
    pub fn respond_with(&self, receipt: TxReceipt) {
        *self.response.lock() = MockResponse::Receipt(receipt);
    }

    /// Make every call return a transport error.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.response.lock() = MockResponse::Error(message.into());
    }

    /// Hold calls open until the notify fires, for in-flight tests.
    pub fn hold_until(&self, gate: Arc<Notify>) {
        *self.hold.lock() = Some(gate);
    }

    /// The calls recorded so far.
    pub fn calls(&self) -> Vec<(MintKind, u32)> {
        self.calls.lock().clone()
    }

    async fn respond(&self, kind: MintKind, quantity: u32) -> Result<TxReceipt> {
        let gate = self.hold.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.calls.lock().push((kind, quantity));
        match &*self.response.lock() {
            MockResponse::Receipt(receipt) => Ok(receipt.clone()),
            MockResponse::Error(message) => Err(anyhow!("{}", message)),
        }
    }
}

impl Default for MockChainWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChainWriter for MockChainWriter {
    async fn submit_whitelist_mint(&self, quantity: u32) -> Result<TxReceipt> {
        self.respond(MintKind::Whitelist, quantity).await
    }

    async fn submit_public_mint(&self, quantity: u32) -> Result<TxReceipt> {
        self.respond(MintKind::Public, quantity).await
    }

    async fn submit_airdrop(&self, quantity: u32) -> Result<TxReceipt> {
        self.respond(MintKind::Airdrop, quantity).await
    }
}

/// A scriptable [`WalletProvider`] that counts selection prompts.
pub struct MockWalletProvider {
    session: Mutex<Option<ProviderSession>>,
    fail_selection: Mutex<bool>,
    network: Mutex<NetworkCheck>,
    interactive_selections: AtomicUsize,
    silent_selections: AtomicUsize,
}

impl MockWalletProvider {
    /// A provider where every selection is cancelled by the user.
    pub fn new() -> Self {
        Self {
            session: Mutex::new(None),
            fail_selection: Mutex::new(false),
            network: Mutex::new(NetworkCheck::Ok),
            interactive_selections: AtomicUsize::new(0),
            silent_selections: AtomicUsize::new(0),
        }
    }

    /// A provider whose selections yield the given session.
    pub fn with_session(provider_name: &str, address: &str) -> Self {
        let provider = Self::new();
        *provider.session.lock() = Some(ProviderSession {
            provider_name: provider_name.to_string(),
            address: address.to_string(),
        });
        provider
    }

    /// Make selection return an error instead of a session.
    pub fn set_fail_selection(&self, fail: bool) {
        *self.fail_selection.lock() = fail;
    }

    pub fn set_network(&self, check: NetworkCheck) {
        *self.network.lock() = check;
    }

    /// How many times the user was prompted (selection with no name).
    pub fn interactive_selections(&self) -> usize {
        self.interactive_selections.load(Ordering::SeqCst)
    }

    /// How many silent restores were attempted.
    pub fn silent_selections(&self) -> usize {
        self.silent_selections.load(Ordering::SeqCst)
    }
}

impl Default for MockWalletProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WalletProvider for MockWalletProvider {
    async fn select_provider(&self, name: Option<&str>) -> Result<Option<ProviderSession>> {
        match name {
            Some(_) => self.silent_selections.fetch_add(1, Ordering::SeqCst),
            None => self.interactive_selections.fetch_add(1, Ordering::SeqCst),
        };
        if *self.fail_selection.lock() {
            return Err(anyhow!("mock provider selection failure"));
        }
        let session = self.session.lock().clone();
        Ok(match (name, session) {
            // Silent restore only succeeds for the remembered provider
            (Some(requested), Some(s)) if s.provider_name == requested => Some(s),
            (Some(_), _) => None,
            (None, s) => s,
        })
    }

    async fn check_current_network(&self) -> Result<NetworkCheck> {
        Ok(*self.network.lock())
    }
}
