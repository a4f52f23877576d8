//! Console wiring: stores, simulated chain, and the controller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use mint_chain::sim::SimulatedChain;
use mint_chain::wallet::LocalWalletProvider;
use mint_controller::controller::MintController;
use mint_session::manager::WalletSessionManager;
use mint_session::store::FsSessionStore;
use mint_settings::store::FsSettingsStore;
use mint_settings::subscribers::{FsSubscriberStore, SubscriptionGateway};

/// Address the local provider connects as when none is supplied.
const DEV_WALLET: &str = "0x0000000000000000000000000000000000001337";

const CHAIN_FILE: &str = "chain.json";
const SESSION_FILE: &str = "session.json";
const SETTINGS_FILE: &str = "settings.json";
const SUBSCRIBERS_FILE: &str = "subscribers.json";

/// Everything a command needs, wired over one home directory.
pub struct ConsoleContext {
    home: PathBuf,
    pub chain: Arc<SimulatedChain>,
    pub controller: MintController,
    pub gateway: SubscriptionGateway,
    pub settings: Arc<FsSettingsStore>,
}

impl ConsoleContext {
    pub fn load(home: PathBuf, wallet_address: Option<String>) -> Result<Self> {
        let chain = Arc::new(SimulatedChain::load_or_create(&home.join(CHAIN_FILE))?);

        let provider = Arc::new(LocalWalletProvider::new(
            wallet_address.unwrap_or_else(|| DEV_WALLET.to_string()),
        ));
        let session_store = Arc::new(FsSessionStore::new(home.join(SESSION_FILE)));
        let sessions = Arc::new(WalletSessionManager::new(provider, session_store));

        let settings = Arc::new(FsSettingsStore::new(home.join(SETTINGS_FILE)));
        let subscribers = Arc::new(FsSubscriberStore::new(home.join(SUBSCRIBERS_FILE)));

        let controller =
            MintController::new(chain.clone(), chain.clone(), sessions, settings.clone());
        let gateway = SubscriptionGateway::new(subscribers, settings.clone());

        Ok(Self {
            home,
            chain,
            controller,
            gateway,
            settings,
        })
    }

    /// Initial load plus the wallet-scoped follow-up refresh.
    ///
    /// Bootstrap restores the session concurrently with the first snapshot;
    /// once a wallet is known, a second refresh picks up its mint count.
    pub async fn ready(&self) {
        self.controller.bootstrap().await;
        if let Some(address) = self.controller.session().address {
            self.chain.set_active_wallet(Some(&address));
            self.controller.refresh().await;
        }
    }

    /// Persist the simulated chain state.
    pub fn save(&self) -> Result<()> {
        self.chain.save(&self.home.join(CHAIN_FILE))
    }
}

/// Remove all persisted console state.
pub fn clean(home: &Path, json: bool) -> Result<()> {
    let mut removed = Vec::new();
    for file in [CHAIN_FILE, SESSION_FILE, SETTINGS_FILE, SUBSCRIBERS_FILE] {
        let path = home.join(file);
        if path.exists() {
            std::fs::remove_file(&path)?;
            removed.push(file);
        }
    }
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "success": true,
                "removed": removed,
            }))?
        );
    } else if removed.is_empty() {
        println!("No console state to remove");
    } else {
        println!("Removed {} state file(s) from {}", removed.len(), home.display());
    }
    Ok(())
}
