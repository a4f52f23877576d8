//! mint-console: a developer CLI for rehearsing a token drop locally
//!
//! Drives the mint controller against a simulated drop contract with
//! JSON-file persistence, so a full sale can be walked through - phase
//! flips, wallet connects, mints, supply exhaustion - without a node.
//!
//! ## Example Usage
//!
//! ```bash
//! # Open the public sale on the simulated contract
//! mint-console phase set public-sale
//!
//! # Connect the local dev wallet and mint
//! mint-console connect
//! mint-console mint --quantity 2
//!
//! # Inspect where the drop stands
//! mint-console status
//!
//! # Operator settings shown while the sale is closed
//! mint-console settings set minting-status "Opens Friday"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod console_cli;

use console_cli::{
    context::ConsoleContext,
    mint::MintCmd,
    phase::PhaseCmd,
    settings::SettingsCmd,
    status::StatusCmd,
    subscribers::SubscribersCmd,
    wallet::{ConnectCmd, DisconnectCmd, WalletCmd},
};

#[derive(Parser)]
#[command(
    name = "mint-console",
    author,
    version,
    about = "Local rehearsal console for a token drop",
    long_about = "Drives the mint phase controller against a simulated drop contract.\n\n\
                  State persists under the console home directory across invocations."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Console home directory (default: ~/.mint-console)
    #[arg(long, global = true)]
    home: Option<std::path::PathBuf>,

    /// Wallet address used by the local provider
    #[arg(long, global = true)]
    address: Option<String>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show phase, supply, pricing, and session state
    Status(StatusCmd),

    /// Connect the local wallet provider
    Connect(ConnectCmd),

    /// Disconnect and forget the remembered provider
    Disconnect(DisconnectCmd),

    /// Show the current wallet session
    Wallet(WalletCmd),

    /// Submit a mint for the active phase
    Mint(MintCmd),

    /// Flip the simulated contract's phase flags
    Phase(PhaseCmd),

    /// Read or update operator settings
    Settings(SettingsCmd),

    /// Capture or list subscribers
    Subscribers(SubscribersCmd),

    /// Remove all persisted console state
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        command,
        home,
        address,
        json,
    } = Cli::parse();
    let home = home.unwrap_or_else(mint_types::env_utils::console_home);

    if let Commands::Clean = command {
        return console_cli::context::clean(&home, json);
    }

    let ctx = ConsoleContext::load(home, address)?;

    let result = match command {
        Commands::Status(cmd) => cmd.execute(&ctx, json).await,
        Commands::Connect(cmd) => cmd.execute(&ctx, json).await,
        Commands::Disconnect(cmd) => cmd.execute(&ctx, json).await,
        Commands::Wallet(cmd) => cmd.execute(&ctx, json).await,
        Commands::Mint(cmd) => cmd.execute(&ctx, json).await,
        Commands::Phase(cmd) => cmd.execute(&ctx, json).await,
        Commands::Settings(cmd) => cmd.execute(&ctx, json),
        Commands::Subscribers(cmd) => cmd.execute(&ctx, json).await,
        // Handled before the context loads
        Commands::Clean => Ok(()),
    };

    // Persist simulated chain state on success
    if result.is_ok() {
        ctx.save()?;
    }

    result
}
