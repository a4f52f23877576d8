//! Output helpers shared by the commands.

use anyhow::Result;
use serde::Serialize;

use mint_session::manager::WalletSession;
use mint_types::address::short_address;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// "0x1f1f...1a27 (metamask)" or "not connected".
pub fn describe_session(session: &WalletSession) -> String {
    match (&session.address, &session.provider_name) {
        (Some(address), Some(provider)) => {
            format!("{} ({})", short_address(address), provider)
        }
        (Some(address), None) => short_address(address),
        _ => "not connected".to_string(),
    }
}
