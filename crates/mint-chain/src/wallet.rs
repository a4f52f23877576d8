//! Wallet provider selection.
//!
//! Mirrors the onboarding flow of browser wallet libraries: selection with
//! no argument prompts the user to pick a provider; selection with a
//! remembered name silently re-establishes the previous session.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use mint_types::address::normalize_address;

/// A successfully selected wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSession {
    /// Provider identifier (e.g. "metamask", "local").
    pub provider_name: String,
    /// Connected wallet address, canonical form.
    pub address: String,
}

/// Outcome of a network check after selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NetworkCheck {
    Ok,
    Mismatch,
}

/// Wallet provider collaborator.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
    /// Select a provider.
    ///
    /// With `None`, selection is interactive and may be cancelled by the
    /// user - cancellation is `Ok(None)`, not an error. With a remembered
    /// name, selection is silent and yields `Ok(None)` when that provider
    /// is no longer available.
    async fn select_provider(&self, name: Option<&str>) -> Result<Option<ProviderSession>>;

    /// Check that the wallet is on the expected network.
    async fn check_current_network(&self) -> Result<NetworkCheck>;
}

/// A provider bound to a fixed local dev account.
///
/// Used by the CLI against the simulated chain; "interactive" selection
/// always succeeds with the configured address.
pub struct LocalWalletProvider {
    name: String,
    address: String,
}

impl LocalWalletProvider {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            name: "local".to_string(),
            address: normalize_address(&address.into()),
        }
    }
}

#[async_trait::async_trait]
impl WalletProvider for LocalWalletProvider {
    async fn select_provider(&self, name: Option<&str>) -> Result<Option<ProviderSession>> {
        match name {
            Some(requested) if requested != self.name => Ok(None),
            _ => Ok(Some(ProviderSession {
                provider_name: self.name.clone(),
                address: self.address.clone(),
            })),
        }
    }

    async fn check_current_network(&self) -> Result<NetworkCheck> {
        Ok(NetworkCheck::Ok)
    }
}
