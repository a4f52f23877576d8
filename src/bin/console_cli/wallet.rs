//! Wallet session commands.

use anyhow::Result;
use clap::Args;

use super::context::ConsoleContext;
use super::output::{describe_session, print_json};

#[derive(Debug, Args)]
pub struct ConnectCmd {}

impl ConnectCmd {
    pub async fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        // Restore first so reconnecting is a no-op rather than a re-prompt
        ctx.ready().await;
        let session = if ctx.controller.session().is_connected() {
            ctx.controller.session()
        } else {
            let session = ctx.controller.sessions().connect().await;
            if let Some(address) = &session.address {
                ctx.chain.set_active_wallet(Some(address));
                ctx.controller.refresh().await;
            }
            session
        };

        if json {
            return print_json(&serde_json::json!({
                "connected": session.is_connected(),
                "address": session.address,
                "provider": session.provider_name,
            }));
        }
        if session.is_connected() {
            println!("Connected: {}", describe_session(&session));
        } else {
            println!("Wallet connection cancelled");
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct DisconnectCmd {}

impl DisconnectCmd {
    pub async fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        ctx.controller.sessions().disconnect();
        if json {
            return print_json(&serde_json::json!({ "connected": false }));
        }
        println!("Disconnected");
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct WalletCmd {}

impl WalletCmd {
    pub async fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        ctx.ready().await;
        let session = ctx.controller.session();
        let snapshot = ctx.controller.snapshot();

        if json {
            return print_json(&serde_json::json!({
                "connected": session.is_connected(),
                "address": session.address,
                "provider": session.provider_name,
                "number_minted": snapshot.supply.number_minted,
            }));
        }
        println!("Wallet: {}", describe_session(&session));
        if session.is_connected() {
            println!("Minted: {}", snapshot.supply.number_minted);
        }
        Ok(())
    }
}
