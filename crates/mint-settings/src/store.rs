//! Key/value settings store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use parking_lot::Mutex;

use mint_types::env_utils::console_home;
use mint_types::fsio::{atomic_write_json, read_json_opt};

/// Settings key: where subscribers download the companion book from.
pub const KEY_DOWNLOAD_LINK: &str = "download_link";

/// Settings key: the operator-editable status label shown while the sale
/// is closed.
pub const KEY_MINTING_STATUS: &str = "minting_status";

/// Default status label when the operator has never set one.
pub const DEFAULT_MINTING_STATUS: &str = "Coming Soon";

/// Upserting key/value store behind the admin surface.
pub trait SettingsStore: Send + Sync {
    /// Current value of a key, `None` if never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace-or-insert a value.
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// The status label with its default applied.
pub fn minting_status(store: &dyn SettingsStore) -> String {
    match store.get(KEY_MINTING_STATUS) {
        Ok(Some(value)) if !value.trim().is_empty() => value,
        Ok(_) => DEFAULT_MINTING_STATUS.to_string(),
        Err(e) => {
            tracing::warn!("settings read failed, using default status: {:#}", e);
            DEFAULT_MINTING_STATUS.to_string()
        }
    }
}

/// The download link, empty string if never set.
pub fn download_link(store: &dyn SettingsStore) -> String {
    store
        .get(KEY_DOWNLOAD_LINK)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Filesystem-backed settings store (one JSON object per file).
pub struct FsSettingsStore {
    path: PathBuf,
}

impl FsSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(console_home().join("settings.json"))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        Ok(read_json_opt(&self.path)?.unwrap_or_default())
    }
}

impl SettingsStore for FsSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        atomic_write_json(&self.path, &all)
    }
}

/// In-memory settings store for tests.
#[derive(Default)]
pub struct MemorySettingsStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
