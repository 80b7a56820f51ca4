//! `product` - manage product definitions.

use clap::Subcommand;

use frostbox_client::error::Result;
use frostbox_client::gateway::{InventoryGateway, NewProduct};
use frostbox_client::state::AppState;
use frostbox_client::storage::ValidationError;
use frostbox_core::ProductId;

use super::session;

#[derive(Subcommand)]
pub enum ProductAction {
    /// List your product definitions
    List,
    /// Define a new product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<String>,
        /// Unit the quantity is measured in (e.g., "L", "pcs")
        #[arg(long)]
        unit: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        barcode: Option<String>,
    },
    /// Edit a product definition
    Update {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        unit: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        barcode: Option<String>,
    },
    /// Delete a product definition
    Delete {
        #[arg(long)]
        id: i32,
    },
}

fn build_product(
    name: String,
    category: Option<String>,
    unit: String,
    image_url: Option<String>,
    barcode_ref: Option<String>,
) -> Result<NewProduct> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyField("name").into());
    }
    if unit.trim().is_empty() {
        return Err(ValidationError::EmptyField("unit").into());
    }
    Ok(NewProduct {
        name,
        category,
        unit,
        image_url,
        barcode_ref,
    })
}

pub async fn run(state: &AppState, action: ProductAction) -> Result<()> {
    let gateway = state.gateway();
    match action {
        ProductAction::List => {
            let user = session::require_user(state)?;
            let products = gateway.list_products(user.user_id).await?;
            if products.is_empty() {
                println!("No products yet.");
            }
            for product in products {
                println!(
                    "{}  {} [{}] per {}",
                    product.product_id,
                    product.name,
                    product.category.as_deref().unwrap_or("uncategorized"),
                    product.unit
                );
            }
        }
        ProductAction::Add {
            name,
            category,
            unit,
            image_url,
            barcode,
        } => {
            let user = session::require_user(state)?;
            let product = build_product(name, category, unit, image_url, barcode)?;
            gateway.create_product(user.user_id, &product).await?;
            println!("Created product {:?}.", product.name);
        }
        ProductAction::Update {
            id,
            name,
            category,
            unit,
            image_url,
            barcode,
        } => {
            let product = build_product(name, category, unit, image_url, barcode)?;
            gateway.update_product(ProductId::new(id), &product).await?;
            println!("Updated product {id}.");
        }
        ProductAction::Delete { id } => {
            gateway.delete_product(ProductId::new(id)).await?;
            println!("Deleted product {id}.");
        }
    }
    Ok(())
}
