//! Operator settings commands.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use mint_settings::store::{
    download_link, minting_status, SettingsStore, KEY_DOWNLOAD_LINK, KEY_MINTING_STATUS,
};

use super::context::ConsoleContext;
use super::output::print_json;

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum SettingKey {
    /// Link handed to subscribers
    DownloadLink,
    /// Free-text label shown while the sale is closed
    MintingStatus,
}

impl SettingKey {
    fn as_store_key(self) -> &'static str {
        match self {
            SettingKey::DownloadLink => KEY_DOWNLOAD_LINK,
            SettingKey::MintingStatus => KEY_MINTING_STATUS,
        }
    }
}

#[derive(Debug, Args)]
pub struct SettingsCmd {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Debug, Subcommand)]
enum SettingsSubcommand {
    /// Current value of a key (default when unset)
    Get { key: SettingKey },

    /// Replace-or-insert a value
    Set { key: SettingKey, value: String },
}

impl SettingsCmd {
    pub fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        let store = ctx.settings.as_ref();
        match &self.command {
            SettingsSubcommand::Get { key } => {
                let value = match key {
                    SettingKey::MintingStatus => minting_status(store),
                    SettingKey::DownloadLink => download_link(store),
                };
                if json {
                    return print_json(&serde_json::json!({
                        "key": key.as_store_key(),
                        "value": value,
                    }));
                }
                println!("{}", value);
            }
            SettingsSubcommand::Set { key, value } => {
                store.put(key.as_store_key(), value)?;
                if json {
                    return print_json(&serde_json::json!({
                        "key": key.as_store_key(),
                        "value": value,
                        "success": true,
                    }));
                }
                println!("Updated {}", key.as_store_key());
            }
        }
        Ok(())
    }
}
