//! Subscriber capture commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use mint_types::address::short_address;

use super::context::ConsoleContext;
use super::output::print_json;

#[derive(Debug, Args)]
pub struct SubscribersCmd {
    #[command(subcommand)]
    command: SubscribersSubcommand,
}

#[derive(Debug, Subcommand)]
enum SubscribersSubcommand {
    /// Subscribe an email, correlated with the connected wallet
    Add { email: String },

    /// List captured subscribers
    List,
}

impl SubscribersCmd {
    pub async fn execute(&self, ctx: &ConsoleContext, json: bool) -> Result<()> {
        match &self.command {
            SubscribersSubcommand::Add { email } => {
                ctx.ready().await;
                let session = ctx.controller.session();
                let outcome = ctx
                    .gateway
                    .subscribe(email, session.address.as_deref())?;

                if json {
                    return print_json(&outcome);
                }
                println!("{}", outcome.message);
                if let Some(link) = outcome.download_link {
                    println!("Download: {}", link);
                }
            }
            SubscribersSubcommand::List => {
                let subscribers = ctx.gateway.list()?;
                if json {
                    return print_json(&subscribers);
                }
                if subscribers.is_empty() {
                    println!("No subscribers yet");
                }
                for subscriber in subscribers {
                    println!(
                        "{}  {}  {}",
                        subscriber.subscribed_at.format("%Y-%m-%d %H:%M"),
                        subscriber.email,
                        short_address(&subscriber.wallet_address)
                    );
                }
            }
        }
        Ok(())
    }
}
