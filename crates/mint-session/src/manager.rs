//! Wallet session manager.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, warn};

use mint_chain::wallet::{NetworkCheck, WalletProvider};
use mint_types::address::normalize_address;

use crate::store::{PersistedSession, SessionStore};

/// The in-memory wallet session.
///
/// Both fields are absent until a provider has been selected. The address
/// is the sole external identity used for quantity guarding and subscriber
/// correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    pub address: Option<String>,
    pub provider_name: Option<String>,
}

impl WalletSession {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

/// Owns the wallet session and its durable lifecycle.
///
/// Selection failures and cancellations never surface as errors; the
/// session just stays empty. Callers inspect the returned session to decide
/// what to render.
pub struct WalletSessionManager {
    provider: Arc<dyn WalletProvider>,
    store: Arc<dyn SessionStore>,
    session: RwLock<WalletSession>,
}

impl WalletSessionManager {
    pub fn new(provider: Arc<dyn WalletProvider>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            provider,
            store,
            session: RwLock::new(WalletSession::empty()),
        }
    }

    /// The current session.
    pub fn session(&self) -> WalletSession {
        self.session.read().clone()
    }

    /// The connected address, if any.
    pub fn address(&self) -> Option<String> {
        self.session.read().address.clone()
    }

    /// Interactive connect: prompt for a provider, remember it on success.
    ///
    /// A network mismatch is logged but does not tear the session down;
    /// the chain will reject writes from the wrong network anyway.
    pub async fn connect(&self) -> WalletSession {
        let selected = match self.provider.select_provider(None).await {
            Ok(selected) => selected,
            Err(e) => {
                warn!("wallet provider selection failed: {:#}", e);
                None
            }
        };
        let Some(provider_session) = selected else {
            debug!("wallet selection cancelled");
            return self.session();
        };

        let persisted = PersistedSession {
            provider_name: provider_session.provider_name.clone(),
            connected_at: Utc::now(),
        };
        if let Err(e) = self.store.save(&persisted) {
            warn!("failed to persist wallet provider: {:#}", e);
        }

        match self.provider.check_current_network().await {
            Ok(NetworkCheck::Mismatch) => {
                warn!("connected wallet is on an unexpected network");
            }
            Err(e) => warn!("network check failed: {:#}", e),
            Ok(NetworkCheck::Ok) => {}
        }

        let session = WalletSession {
            address: Some(normalize_address(&provider_session.address)),
            provider_name: Some(provider_session.provider_name),
        };
        *self.session.write() = session.clone();
        session
    }

    /// Silent restore, run once at startup.
    ///
    /// With no remembered provider this is a no-op and never prompts.
    /// Any failure along the way leaves the session empty.
    pub async fn restore(&self) -> WalletSession {
        let persisted = match self.store.load() {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("failed to read persisted session: {:#}", e);
                None
            }
        };
        let Some(persisted) = persisted else {
            return self.session();
        };

        match self
            .provider
            .select_provider(Some(&persisted.provider_name))
            .await
        {
            Ok(Some(provider_session)) => {
                let session = WalletSession {
                    address: Some(normalize_address(&provider_session.address)),
                    provider_name: Some(provider_session.provider_name),
                };
                *self.session.write() = session.clone();
                session
            }
            Ok(None) => {
                debug!(
                    "remembered provider '{}' is no longer available",
                    persisted.provider_name
                );
                self.session()
            }
            Err(e) => {
                debug!("silent restore failed: {:#}", e);
                self.session()
            }
        }
    }

    /// Clear durable storage and the in-memory session.
    pub fn disconnect(&self) {
        if let Err(e) = self.store.clear() {
            warn!("failed to clear persisted session: {:#}", e);
        }
        *self.session.write() = WalletSession::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;
    use mint_chain::mock::MockWalletProvider;

    fn manager(
        provider: MockWalletProvider,
        store: MemorySessionStore,
    ) -> (WalletSessionManager, Arc<MockWalletProvider>, Arc<MemorySessionStore>) {
        let provider = Arc::new(provider);
        let store = Arc::new(store);
        (
            WalletSessionManager::new(provider.clone(), store.clone()),
            provider,
            store,
        )
    }

    #[tokio::test]
    async fn test_connect_persists_provider() {
        let (manager, _, store) =
            manager(MockWalletProvider::with_session("metamask", "0xABC"), MemorySessionStore::new());

        let session = manager.connect().await;
        assert!(session.is_connected());
        assert_eq!(session.provider_name.as_deref(), Some("metamask"));
        assert_eq!(
            store.load().unwrap().unwrap().provider_name,
            "metamask"
        );
    }

    #[tokio::test]
    async fn test_cancelled_connect_leaves_session_empty() {
        let (manager, _, store) = manager(MockWalletProvider::new(), MemorySessionStore::new());

        let session = manager.connect().await;
        assert!(!session.is_connected());
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_selection_is_not_an_error() {
        let provider = MockWalletProvider::with_session("metamask", "0xABC");
        provider.set_fail_selection(true);
        let (manager, _, _) = manager(provider, MemorySessionStore::new());

        let session = manager.connect().await;
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn test_restore_with_empty_store_never_prompts() {
        let (manager, provider, _) =
            manager(MockWalletProvider::with_session("metamask", "0xABC"), MemorySessionStore::new());

        let session = manager.restore().await;
        assert!(!session.is_connected());
        assert_eq!(provider.interactive_selections(), 0);
        assert_eq!(provider.silent_selections(), 0);
    }

    #[tokio::test]
    async fn test_restore_reselects_remembered_provider_silently() {
        let (manager, provider, _) = manager(
            MockWalletProvider::with_session("metamask", "0xABC"),
            MemorySessionStore::with_provider("metamask"),
        );

        let session = manager.restore().await;
        assert!(session.is_connected());
        assert_eq!(provider.interactive_selections(), 0);
        assert_eq!(provider.silent_selections(), 1);
    }

    #[tokio::test]
    async fn test_restore_with_unavailable_provider_stays_empty() {
        let (manager, _, _) = manager(
            MockWalletProvider::with_session("metamask", "0xABC"),
            MemorySessionStore::with_provider("coinbase"),
        );

        let session = manager.restore().await;
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn test_disconnect_clears_everything() {
        let (manager, _, store) =
            manager(MockWalletProvider::with_session("metamask", "0xABC"), MemorySessionStore::new());

        manager.connect().await;
        assert!(manager.session().is_connected());

        manager.disconnect();
        assert!(!manager.session().is_connected());
        assert!(store.load().unwrap().is_none());
    }
}
