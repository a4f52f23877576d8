//! The controller facade.
//!
//! `MintController` is what the interface talks to: it owns the snapshot,
//! the session manager, the executor, and the settings fallback, and keeps
//! phase-conditional logic out of the presentation layer.

use std::sync::Arc;

use parking_lot::RwLock;

use mint_chain::reader::ChainStateReader;
use mint_chain::writer::ChainWriter;
use mint_session::manager::{WalletSession, WalletSessionManager};
use mint_settings::store::{minting_status, SettingsStore};
use mint_types::economics::{MintLimits, MintRequest, PhaseEconomics};
use mint_types::outcome::TransactionResult;
use mint_types::phase::MintPhase;

use crate::executor::MintExecutor;
use crate::pricing::resolve_economics;
use crate::quantity;
use crate::snapshot::ChainSnapshot;

pub struct MintController {
    reader: Arc<dyn ChainStateReader>,
    executor: MintExecutor,
    sessions: Arc<WalletSessionManager>,
    settings: Arc<dyn SettingsStore>,
    limits: MintLimits,
    snapshot: RwLock<ChainSnapshot>,
}

impl MintController {
    pub fn new(
        reader: Arc<dyn ChainStateReader>,
        writer: Arc<dyn ChainWriter>,
        sessions: Arc<WalletSessionManager>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            reader,
            executor: MintExecutor::new(writer),
            sessions,
            settings,
            limits: MintLimits::default(),
            snapshot: RwLock::new(ChainSnapshot::default()),
        }
    }

    /// Override the configured per-phase ceilings.
    pub fn with_limits(mut self, limits: MintLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Initial load: session restore and the first snapshot refresh run
    /// concurrently, and this completes only once both have settled.
    ///
    /// Restore carries no ordering dependency on the refresh, but callers
    /// should not treat the connect affordance as interactive until this
    /// returns.
    pub async fn bootstrap(&self) {
        futures::join!(self.refresh(), self.sessions.restore());
    }

    /// Re-query the chain into a fresh snapshot.
    pub async fn refresh(&self) {
        let wallet = self.sessions.address();
        let previous = self.snapshot.read().clone();
        let next = ChainSnapshot::refresh(self.reader.as_ref(), wallet.as_deref(), &previous).await;
        *self.snapshot.write() = next;
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        self.snapshot.read().clone()
    }

    pub fn phase(&self) -> MintPhase {
        self.snapshot.read().phase()
    }

    /// The economics of the current phase, recomputed on every call so a
    /// phase flip between refreshes can never serve stale pricing.
    pub fn economics(&self) -> PhaseEconomics {
        let snapshot = self.snapshot.read();
        resolve_economics(snapshot.phase(), &snapshot, &self.limits)
    }

    /// The storefront badge text: the phase label while the sale is
    /// actionable, otherwise the operator's status setting.
    pub fn status_label(&self) -> String {
        match self.phase().storefront_label() {
            Some(label) => label.to_string(),
            None => minting_status(self.settings.as_ref()),
        }
    }

    /// Clamp a quantity into the current phase's legal range.
    pub fn clamp_quantity(&self, requested: u32) -> u32 {
        quantity::clamp(requested, &self.economics())
    }

    pub fn increment_quantity(&self, current: u32) -> u32 {
        quantity::increment(current, &self.economics())
    }

    pub fn decrement_quantity(&self, current: u32) -> u32 {
        quantity::decrement(current, &self.economics())
    }

    /// Total price of a selection at current economics, in wei.
    pub fn total_price_wei(&self, quantity: u32) -> u128 {
        self.economics().total_price_wei(quantity)
    }

    pub fn session(&self) -> WalletSession {
        self.sessions.session()
    }

    /// The session manager, for connect/disconnect driven by the interface.
    pub fn sessions(&self) -> &WalletSessionManager {
        &self.sessions
    }

    /// Whether a submission is currently outstanding.
    pub fn is_minting(&self) -> bool {
        self.executor.is_in_flight()
    }

    /// Guard, build, and submit a purchase for the current phase.
    pub async fn mint(&self, requested_quantity: u32) -> TransactionResult {
        if !self.sessions.session().is_connected() {
            return TransactionResult::failure("Connect a wallet before minting");
        }
        let economics = self.economics();
        let request = MintRequest {
            quantity: quantity::clamp(requested_quantity, &economics),
            phase: economics.phase,
        };
        self.executor.submit(&request).await
    }
}
