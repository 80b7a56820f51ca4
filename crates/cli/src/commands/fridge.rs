//! `fridge` - manage fridges and their contents.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use frostbox_client::error::Result;
use frostbox_client::gateway::InventoryGateway;
use frostbox_client::state::AppState;
use frostbox_client::storage::ValidationError;
use frostbox_core::{EntryId, FridgeId, ProductId, Quantity};

use super::{format_date, session};

#[derive(Subcommand)]
pub enum FridgeAction {
    /// List your fridges
    List,
    /// Create a fridge
    Add {
        #[arg(long)]
        title: String,
    },
    /// Rename a fridge
    Rename {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        title: String,
    },
    /// Delete a fridge and its contents
    Delete {
        #[arg(long)]
        id: i32,
    },
    /// Show the contents of a fridge with freshness states
    Contents {
        #[arg(long)]
        id: i32,
    },
    /// Stock a product into a fridge
    Stock {
        #[arg(long)]
        id: i32,
        /// Product id to stock
        #[arg(long)]
        product: i32,
        #[arg(long)]
        quantity: Quantity,
        /// Expiry day (YYYY-MM-DD)
        #[arg(long)]
        expires: Option<NaiveDate>,
        /// Stocking day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        stocked: Option<NaiveDate>,
    },
    /// Remove a product from a fridge entirely
    Unstock {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        product: i32,
    },
    /// Update quantity and dates of one stocked entry
    UpdateEntry {
        #[arg(long)]
        entry: i32,
        #[arg(long)]
        quantity: Quantity,
        /// Expiry day (YYYY-MM-DD); omit to clear
        #[arg(long)]
        expires: Option<NaiveDate>,
        /// Stocking day (YYYY-MM-DD)
        #[arg(long)]
        stocked: NaiveDate,
    },
}

pub async fn run(state: &AppState, action: FridgeAction) -> Result<()> {
    let gateway = state.gateway();
    match action {
        FridgeAction::List => {
            let user = session::require_user(state)?;
            let fridges = gateway.list_fridges(user.user_id).await?;
            if fridges.is_empty() {
                println!("No fridges yet.");
            }
            for fridge in fridges {
                println!("{}  {}", fridge.fridge_id, fridge.title);
            }
        }
        FridgeAction::Add { title } => {
            if title.trim().is_empty() {
                return Err(ValidationError::EmptyField("title").into());
            }
            let user = session::require_user(state)?;
            gateway.create_fridge(user.user_id, &title).await?;
            println!("Created fridge {title:?}.");
        }
        FridgeAction::Rename { id, title } => {
            if title.trim().is_empty() {
                return Err(ValidationError::EmptyField("title").into());
            }
            gateway.update_fridge(FridgeId::new(id), &title).await?;
            println!("Renamed fridge {id} to {title:?}.");
        }
        FridgeAction::Delete { id } => {
            gateway.delete_fridge(FridgeId::new(id)).await?;
            println!("Deleted fridge {id}.");
        }
        FridgeAction::Contents { id } => {
            let fridge = gateway.get_fridge(FridgeId::new(id)).await?;
            let entries = gateway.list_entries(fridge.fridge_id).await?;
            let today = Local::now().date_naive();

            println!("{} ({} entries)", fridge.title, entries.len());
            for entry in entries {
                println!(
                    "{}  {} - {} {} (expires {}, stocked {}, {})",
                    entry.entry_id,
                    entry.name,
                    entry.quantity,
                    entry.unit,
                    format_date(entry.expires_on),
                    entry.stocked_on,
                    entry.freshness(today)
                );
            }
        }
        FridgeAction::Stock {
            id,
            product,
            quantity,
            expires,
            stocked,
        } => {
            gateway
                .add_entry(
                    FridgeId::new(id),
                    ProductId::new(product),
                    quantity,
                    expires,
                    stocked,
                )
                .await?;
            println!("Stocked product {product} in fridge {id}.");
        }
        FridgeAction::Unstock { id, product } => {
            gateway
                .remove_entry(FridgeId::new(id), ProductId::new(product))
                .await?;
            println!("Removed product {product} from fridge {id}.");
        }
        FridgeAction::UpdateEntry {
            entry,
            quantity,
            expires,
            stocked,
        } => {
            gateway
                .update_entry(EntryId::new(entry), quantity, expires, stocked)
                .await?;
            println!("Updated entry {entry}.");
        }
    }
    Ok(())
}
