//! Durable storage for the last-selected wallet provider.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use mint_types::env_utils::console_home;
use mint_types::fsio::{atomic_write_json, read_json_opt};

/// The record written on a successful connect.
///
/// Only the provider name matters for restore; the address is re-derived
/// from the provider itself so a stale address can never leak into a new
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub provider_name: String,
    pub connected_at: DateTime<Utc>,
}

/// Durable storage keyed by nothing - there is at most one remembered
/// provider per installation.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<PersistedSession>>;
    fn save(&self, session: &PersistedSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Filesystem-backed session store.
pub struct FsSessionStore {
    path: PathBuf,
}

impl FsSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store under the console home directory.
    pub fn default_location() -> Self {
        Self::new(console_home().join("session.json"))
    }
}

impl SessionStore for FsSessionStore {
    fn load(&self) -> Result<Option<PersistedSession>> {
        read_json_opt(&self.path)
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        atomic_write_json(&self.path, session)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory session store for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<PersistedSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a remembered provider.
    pub fn with_provider(provider_name: &str) -> Self {
        let store = Self::new();
        *store.slot.lock() = Some(PersistedSession {
            provider_name: provider_name.to_string(),
            connected_at: Utc::now(),
        });
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<PersistedSession>> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        *self.slot.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}
