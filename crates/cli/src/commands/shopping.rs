//! `shopping` - manage the device-local shopping list.
//!
//! Adding an item looks the product and fridge up at the service and
//! captures a denormalized snapshot; after that the item belongs entirely
//! to this device.

use chrono::NaiveDate;
use clap::Subcommand;

use frostbox_client::error::Result;
use frostbox_client::gateway::{GatewayError, InventoryGateway};
use frostbox_client::models::NewShoppingItem;
use frostbox_client::state::AppState;
use frostbox_core::{FridgeId, ProductId, Quantity, ShoppingItemId};

use super::{format_date, session};

#[derive(Subcommand)]
pub enum ShoppingAction {
    /// Show the shopping list
    List,
    /// Add a product to the list for a target fridge
    Add {
        /// Product id to buy
        #[arg(long)]
        product: i32,
        /// Fridge the purchase is destined for
        #[arg(long)]
        fridge: i32,
        #[arg(long, default_value = "1")]
        quantity: Quantity,
        /// Expected expiry once bought (YYYY-MM-DD)
        #[arg(long)]
        expires: Option<NaiveDate>,
    },
    /// Change quantity/expiry of one item
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        quantity: Quantity,
        /// Expected expiry (YYYY-MM-DD); omit to clear
        #[arg(long)]
        expires: Option<NaiveDate>,
    },
    /// Remove one item
    Remove {
        #[arg(long)]
        id: i64,
    },
    /// Clear the whole list
    Clear,
}

pub async fn run(state: &AppState, action: ShoppingAction) -> Result<()> {
    match action {
        ShoppingAction::List => {
            let items = state.shopping_list().try_list()?;
            if items.is_empty() {
                println!("Shopping list is empty.");
            }
            for item in items {
                println!(
                    "{}  {} - {} {} for {} (expected expiry {})",
                    item.id,
                    item.name,
                    item.quantity,
                    item.unit,
                    item.fridge_title,
                    format_date(item.expires_on)
                );
            }
        }
        ShoppingAction::Add {
            product,
            fridge,
            quantity,
            expires,
        } => {
            let user = session::require_user(state)?;

            // Snapshot the product and target fridge at add time.
            let product_id = ProductId::new(product);
            let products = state.gateway().list_products(user.user_id).await?;
            let product = products
                .into_iter()
                .find(|p| p.product_id == product_id)
                .ok_or_else(|| GatewayError::NotFound(format!("product {product_id}")))?;
            let fridge = state.gateway().get_fridge(FridgeId::new(fridge)).await?;

            let item = state.shopping_list().add(NewShoppingItem::from_catalog(
                &product, &fridge, quantity, expires,
            ))?;
            println!("Added {} (item id {}).", item.name, item.id);
        }
        ShoppingAction::Update {
            id,
            quantity,
            expires,
        } => {
            let updated = state
                .shopping_list()
                .update(ShoppingItemId::new(id), quantity, expires)?;
            if updated {
                println!("Updated item {id}.");
            } else {
                println!("No shopping list item with id {id}.");
            }
        }
        ShoppingAction::Remove { id } => {
            state.shopping_list().remove(ShoppingItemId::new(id))?;
            println!("Removed item {id}.");
        }
        ShoppingAction::Clear => {
            state.shopping_list().clear()?;
            println!("Shopping list cleared.");
        }
    }
    Ok(())
}
