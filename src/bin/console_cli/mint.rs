//! The mint command.

use anyhow::Result;
use clap::Args;

use mint_types::units::format_eth;

use super::context::ConsoleContext;
use super::output::print_json;

#[derive(Debug, Args)]
pub struct MintCmd {
    /// How many tokens to mint (clamped to the phase ceiling)
    #[arg(long, short, default_value_t = 1)]
    pub quantity: u32,
}

impl MintCmd {
    pub async fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        ctx.ready().await;

        let quantity = ctx.controller.clamp_quantity(self.quantity);
        let price = ctx.controller.total_price_wei(quantity);
        let result = ctx.controller.mint(self.quantity).await;

        // Pick up the new supply numbers after a successful mint
        if result.success {
            ctx.controller.refresh().await;
        }

        if json {
            return print_json(&serde_json::json!({
                "success": result.success,
                "message": result.message,
                "quantity": quantity,
                "total_price_eth": format_eth(price),
            }));
        }

        if result.success {
            println!(
                "Minted {} token(s) for {} ETH",
                quantity,
                format_eth(price)
            );
            let supply = ctx.controller.snapshot().supply;
            println!("Supply now {} / {}", supply.total_minted, supply.max_supply);
        } else {
            println!("Mint failed: {}", result.message);
        }
        Ok(())
    }
}
