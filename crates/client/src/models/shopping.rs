//! Shopping list models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use frostbox_core::{FridgeId, ProductId, Quantity, ShoppingItemId};

use crate::gateway::types::{Fridge, Product};

/// A planned purchase, stored only on this device.
///
/// The product and fridge fields are a denormalized snapshot captured when
/// the item was added, so listing never needs a remote join. They are NOT
/// kept in sync: if the source product or fridge is later renamed or
/// deleted remotely, the item keeps the old values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Locally generated identity, unique within the store.
    pub id: ShoppingItemId,
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub unit: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: Quantity,
    /// Expected expiry of the item once bought.
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    /// Fridge the purchase is destined for.
    pub fridge_id: FridgeId,
    pub fridge_title: String,
}

/// Arguments for adding a shopping-list item.
///
/// Only quantity and expiry are caller-chosen; the rest is the snapshot of
/// the selected product and target fridge.
#[derive(Debug, Clone)]
pub struct NewShoppingItem {
    pub product_id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub unit: String,
    pub image_url: Option<String>,
    pub quantity: Quantity,
    pub expires_on: Option<NaiveDate>,
    pub fridge_id: FridgeId,
    pub fridge_title: String,
}

impl NewShoppingItem {
    /// Capture the denormalized snapshot from a product and target fridge.
    #[must_use]
    pub fn from_catalog(
        product: &Product,
        fridge: &Fridge,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name.clone(),
            category: product.category.clone(),
            unit: product.unit.clone(),
            image_url: product.image_url.clone(),
            quantity,
            expires_on,
            fridge_id: fridge.fridge_id,
            fridge_title: fridge.title.clone(),
        }
    }
}
