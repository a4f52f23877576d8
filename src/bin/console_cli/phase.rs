//! Phase flag editing on the simulated contract.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use mint_types::phase::PhaseFlags;
use mint_types::units::parse_eth;

use super::context::ConsoleContext;
use super::output::print_json;

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum PhaseArg {
    Airdrop,
    Whitelist,
    PublicSale,
}

#[derive(Debug, Args)]
pub struct PhaseCmd {
    #[command(subcommand)]
    command: PhaseSubcommand,
}

#[derive(Debug, Subcommand)]
enum PhaseSubcommand {
    /// Open one phase exclusively
    Set { phase: PhaseArg },

    /// Pause minting (overrides any open phase)
    Pause,

    /// Lift the pause, keeping the other flags as they are
    Resume,

    /// Clear every flag (sale not open)
    Clear,

    /// Set per-unit costs in ETH
    Costs {
        /// Whitelist cost, e.g. "0.05"
        #[arg(long)]
        whitelist: Option<String>,

        /// Public sale cost, e.g. "0.08"
        #[arg(long)]
        public: Option<String>,
    },
}

impl PhaseCmd {
    pub async fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        match &self.command {
            PhaseSubcommand::Set { phase } => {
                let flags = match phase {
                    PhaseArg::Airdrop => PhaseFlags {
                        airdrop_active: true,
                        ..PhaseFlags::default()
                    },
                    PhaseArg::Whitelist => PhaseFlags {
                        whitelist_active: true,
                        ..PhaseFlags::default()
                    },
                    PhaseArg::PublicSale => PhaseFlags {
                        public_sale_active: true,
                        ..PhaseFlags::default()
                    },
                };
                ctx.chain.set_flags(flags);
            }
            PhaseSubcommand::Pause => {
                ctx.chain.with_state_mut(|s| s.flags.paused = true);
            }
            PhaseSubcommand::Resume => {
                ctx.chain.with_state_mut(|s| s.flags.paused = false);
            }
            PhaseSubcommand::Clear => {
                ctx.chain.set_flags(PhaseFlags::default());
            }
            PhaseSubcommand::Costs { whitelist, public } => {
                let whitelist = whitelist.as_deref().map(parse_eth).transpose()?;
                let public = public.as_deref().map(parse_eth).transpose()?;
                ctx.chain.with_state_mut(|s| {
                    if let Some(wei) = whitelist {
                        s.wl_cost_wei = wei;
                    }
                    if let Some(wei) = public {
                        s.public_cost_wei = wei;
                    }
                });
            }
        }

        ctx.controller.refresh().await;
        if json {
            return print_json(&serde_json::json!({
                "phase": ctx.controller.phase(),
                "label": ctx.controller.status_label(),
            }));
        }
        println!("Phase is now: {}", ctx.controller.phase());
        Ok(())
    }
}
