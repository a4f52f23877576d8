//! The status command.

use anyhow::Result;
use clap::Args;

use mint_types::units::format_eth;

use super::context::ConsoleContext;
use super::output::{describe_session, print_json};

#[derive(Debug, Args)]
pub struct StatusCmd {}

impl StatusCmd {
    pub async fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        ctx.ready().await;

        let snapshot = ctx.controller.snapshot();
        let economics = ctx.controller.economics();
        let session = ctx.controller.session();

        if json {
            return print_json(&serde_json::json!({
                "phase": ctx.controller.phase(),
                "label": ctx.controller.status_label(),
                "total_minted": snapshot.supply.total_minted,
                "max_supply": snapshot.supply.max_supply,
                "number_minted": snapshot.supply.number_minted,
                "cost_per_unit_eth": format_eth(economics.cost_per_unit_wei),
                "max_per_wallet": economics.max_per_wallet,
                "wallet": session.address,
            }));
        }

        println!("Status:   {}", ctx.controller.status_label());
        println!("Phase:    {}", ctx.controller.phase());
        println!(
            "Minted:   {} / {} ({:.1}%)",
            snapshot.supply.total_minted,
            snapshot.supply.max_supply,
            snapshot.supply.percent_minted()
        );
        println!(
            "Price:    {} ETH per token (max {} per wallet)",
            format_eth(economics.cost_per_unit_wei),
            economics.max_per_wallet
        );
        println!("Wallet:   {}", describe_session(&session));
        if session.is_connected() {
            println!("Yours:    {} minted", snapshot.supply.number_minted);
        }
        Ok(())
    }
}
