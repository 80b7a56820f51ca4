//! Frostbox CLI - household inventory from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Cache the signed-in user (scopes all remote reads)
//! frostbox session set --user-id 1 --username ida --email ida@example.com
//!
//! # Dashboard: counts plus expiry warnings for your first fridge
//! frostbox dashboard
//!
//! # Inventory management
//! frostbox fridge add --title "Kitchen Fridge"
//! frostbox fridge stock --id 3 --product 7 --quantity 2 --expires 2026-08-12
//!
//! # The device-local shopping list
//! frostbox shopping add --product 7 --fridge 3 --quantity 2
//! frostbox shopping list
//! ```
//!
//! # Commands
//!
//! - `dashboard` - Summary counts and expiry partitions
//! - `fridge` - Manage fridges and their contents
//! - `product` - Manage product definitions
//! - `shopping` - Manage the local shopping list
//! - `session` - Manage the cached session user

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use frostbox_client::config::ClientConfig;
use frostbox_client::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "frostbox")]
#[command(author, version, about = "Frostbox household inventory CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard summary
    Dashboard,
    /// Manage fridges and their contents
    Fridge {
        #[command(subcommand)]
        action: commands::fridge::FridgeAction,
    },
    /// Manage product definitions
    Product {
        #[command(subcommand)]
        action: commands::product::ProductAction,
    },
    /// Manage the local shopping list
    Shopping {
        #[command(subcommand)]
        action: commands::shopping::ShoppingAction,
    },
    /// Manage the cached session user
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; command output goes to stdout, diagnostics to the
    // subscriber.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "frostbox=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> frostbox_client::error::Result<()> {
    let config = ClientConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Dashboard => commands::dashboard::show(&state).await,
        Commands::Fridge { action } => commands::fridge::run(&state, action).await,
        Commands::Product { action } => commands::product::run(&state, action).await,
        Commands::Shopping { action } => commands::shopping::run(&state, action).await,
        Commands::Session { action } => commands::session::run(&state, action),
    }
}
