//! Subscriber capture.
//!
//! Visitors leave an email (correlated with their connected wallet) in
//! exchange for the companion book download link. The gateway validates
//! the submission, dedupes by email, and hands back the link from the
//! settings store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use mint_types::address::normalize_address;
use mint_types::env_utils::console_home;
use mint_types::fsio::{atomic_write_json, read_json_opt};

use crate::store::{download_link, SettingsStore};

/// One captured subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub wallet_address: String,
    pub subscribed_at: DateTime<Utc>,
}

/// Append-only subscriber storage.
pub trait SubscriberStore: Send + Sync {
    fn add(&self, subscriber: &Subscriber) -> Result<()>;
    fn list(&self) -> Result<Vec<Subscriber>>;

    fn contains_email(&self, email: &str) -> Result<bool> {
        let needle = email.to_lowercase();
        Ok(self.list()?.iter().any(|s| s.email == needle))
    }
}

/// Filesystem-backed subscriber store (JSON array).
pub struct FsSubscriberStore {
    path: PathBuf,
}

impl FsSubscriberStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(console_home().join("subscribers.json"))
    }
}

impl SubscriberStore for FsSubscriberStore {
    fn add(&self, subscriber: &Subscriber) -> Result<()> {
        let mut all: Vec<Subscriber> = read_json_opt(&self.path)?.unwrap_or_default();
        all.push(subscriber.clone());
        atomic_write_json(&self.path, &all)
    }

    fn list(&self) -> Result<Vec<Subscriber>> {
        Ok(read_json_opt(&self.path)?.unwrap_or_default())
    }
}

/// In-memory subscriber store for tests.
#[derive(Default)]
pub struct MemorySubscriberStore {
    entries: Mutex<Vec<Subscriber>>,
}

impl MemorySubscriberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriberStore for MemorySubscriberStore {
    fn add(&self, subscriber: &Subscriber) -> Result<()> {
        self.entries.lock().push(subscriber.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Subscriber>> {
        Ok(self.entries.lock().clone())
    }
}

/// Outcome of a subscription attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeOutcome {
    pub success: bool,
    pub message: String,
    /// Present on success when the operator has configured a link.
    pub download_link: Option<String>,
}

/// Validates and records subscriptions.
pub struct SubscriptionGateway {
    store: Arc<dyn SubscriberStore>,
    settings: Arc<dyn SettingsStore>,
}

impl SubscriptionGateway {
    pub fn new(store: Arc<dyn SubscriberStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { store, settings }
    }

    /// Capture a subscriber.
    ///
    /// Requires a plausible email and a connected wallet. A repeat email is
    /// not an error - the visitor just gets the link again.
    pub fn subscribe(&self, email: &str, wallet_address: Option<&str>) -> Result<SubscribeOutcome> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Ok(SubscribeOutcome {
                success: false,
                message: "Please enter a valid email".to_string(),
                download_link: None,
            });
        }
        let Some(wallet) = wallet_address.filter(|w| !w.trim().is_empty()) else {
            return Ok(SubscribeOutcome {
                success: false,
                message: "Please connect your wallet first".to_string(),
                download_link: None,
            });
        };

        let link = download_link(self.settings.as_ref());
        let link = (!link.is_empty()).then_some(link);

        if self.store.contains_email(&email)? {
            return Ok(SubscribeOutcome {
                success: true,
                message: "You are already subscribed".to_string(),
                download_link: link,
            });
        }

        self.store.add(&Subscriber {
            email,
            wallet_address: normalize_address(wallet),
            subscribed_at: Utc::now(),
        })?;

        Ok(SubscribeOutcome {
            success: true,
            message: "Subscribed! Your download is ready".to_string(),
            download_link: link,
        })
    }

    /// All captured subscribers, for the admin surface.
    pub fn list(&self) -> Result<Vec<Subscriber>> {
        self.store.list()
    }
}
