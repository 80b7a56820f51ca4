//! Integration tests for Frostbox.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p frostbox-integration-tests
//! ```
//!
//! Tests run against [`StubInventory`], an in-memory fake of the remote
//! inventory service, and temp-dir [`FileStore`]s for device-local state.
//! No live service, no network.
//!
//! [`FileStore`]: frostbox_client::storage::FileStore

// Test-support crate: panicking helpers keep test setup terse.
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::NaiveDate;

use frostbox_client::gateway::types::{Fridge, FridgeEntry, NewProduct, Product};
use frostbox_client::gateway::{GatewayError, InventoryGateway};
use frostbox_core::{EntryId, FridgeId, ProductId, Quantity, UserId};

/// In-memory fake of the remote inventory service.
///
/// Holds fridges, products and per-fridge entries behind mutexes so tests
/// can mutate remote state mid-scenario (e.g., rename a fridge after a
/// snapshot was taken). Each collection can be switched into failure mode
/// to exercise degradation paths, and `entry_calls` counts content
/// fetches so tests can assert a fetch did or did not happen.
#[derive(Default)]
pub struct StubInventory {
    fridges: Mutex<Vec<Fridge>>,
    products: Mutex<Vec<Product>>,
    entries: Mutex<HashMap<FridgeId, Vec<FridgeEntry>>>,
    pub fail_fridges: AtomicBool,
    pub fail_products: AtomicBool,
    pub fail_entries: AtomicBool,
    pub entry_calls: AtomicUsize,
}

impl StubInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_fridge(&self, fridge: Fridge) {
        self.fridges.lock().unwrap().push(fridge);
    }

    pub fn push_product(&self, product: Product) {
        self.products.lock().unwrap().push(product);
    }

    pub fn push_entry(&self, fridge_id: FridgeId, entry: FridgeEntry) {
        self.entries
            .lock()
            .unwrap()
            .entry(fridge_id)
            .or_default()
            .push(entry);
    }

    fn service_error() -> GatewayError {
        GatewayError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            message: "service unavailable".to_owned(),
        }
    }
}

impl InventoryGateway for StubInventory {
    async fn list_fridges(&self, user_id: UserId) -> Result<Vec<Fridge>, GatewayError> {
        if self.fail_fridges.load(Ordering::SeqCst) {
            return Err(Self::service_error());
        }
        Ok(self
            .fridges
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_fridge(&self, fridge_id: FridgeId) -> Result<Fridge, GatewayError> {
        self.fridges
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.fridge_id == fridge_id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("fridge {fridge_id}")))
    }

    async fn create_fridge(&self, user_id: UserId, title: &str) -> Result<(), GatewayError> {
        let mut fridges = self.fridges.lock().unwrap();
        let next = fridges.iter().map(|f| f.fridge_id.as_i32()).max().unwrap_or(0) + 1;
        fridges.push(Fridge {
            fridge_id: FridgeId::new(next),
            user_id,
            title: title.to_owned(),
        });
        Ok(())
    }

    async fn update_fridge(&self, fridge_id: FridgeId, title: &str) -> Result<(), GatewayError> {
        let mut fridges = self.fridges.lock().unwrap();
        let fridge = fridges
            .iter_mut()
            .find(|f| f.fridge_id == fridge_id)
            .ok_or_else(|| GatewayError::NotFound(format!("fridge {fridge_id}")))?;
        fridge.title = title.to_owned();
        Ok(())
    }

    async fn delete_fridge(&self, fridge_id: FridgeId) -> Result<(), GatewayError> {
        self.fridges
            .lock()
            .unwrap()
            .retain(|f| f.fridge_id != fridge_id);
        self.entries.lock().unwrap().remove(&fridge_id);
        Ok(())
    }

    async fn list_products(&self, user_id: UserId) -> Result<Vec<Product>, GatewayError> {
        if self.fail_products.load(Ordering::SeqCst) {
            return Err(Self::service_error());
        }
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_product(
        &self,
        user_id: UserId,
        product: &NewProduct,
    ) -> Result<(), GatewayError> {
        let mut products = self.products.lock().unwrap();
        let next = products
            .iter()
            .map(|p| p.product_id.as_i32())
            .max()
            .unwrap_or(0)
            + 1;
        products.push(Product {
            product_id: ProductId::new(next),
            user_id,
            name: product.name.clone(),
            category: product.category.clone(),
            unit: product.unit.clone(),
            image_url: product.image_url.clone(),
            barcode_ref: product.barcode_ref.clone(),
        });
        Ok(())
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        product: &NewProduct,
    ) -> Result<(), GatewayError> {
        let mut products = self.products.lock().unwrap();
        let existing = products
            .iter_mut()
            .find(|p| p.product_id == product_id)
            .ok_or_else(|| GatewayError::NotFound(format!("product {product_id}")))?;
        existing.name = product.name.clone();
        existing.category = product.category.clone();
        existing.unit = product.unit.clone();
        existing.image_url = product.image_url.clone();
        existing.barcode_ref = product.barcode_ref.clone();
        Ok(())
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), GatewayError> {
        self.products
            .lock()
            .unwrap()
            .retain(|p| p.product_id != product_id);
        Ok(())
    }

    async fn list_entries(&self, fridge_id: FridgeId) -> Result<Vec<FridgeEntry>, GatewayError> {
        self.entry_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_entries.load(Ordering::SeqCst) {
            return Err(Self::service_error());
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&fridge_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_entry(
        &self,
        fridge_id: FridgeId,
        product_id: ProductId,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
        stocked_on: Option<NaiveDate>,
    ) -> Result<(), GatewayError> {
        let product = self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(format!("product {product_id}")))?;

        let mut entries = self.entries.lock().unwrap();
        let next = entries
            .values()
            .flatten()
            .map(|e| e.entry_id.as_i32())
            .max()
            .unwrap_or(0)
            + 1;

        entries.entry(fridge_id).or_default().push(FridgeEntry {
            entry_id: EntryId::new(next),
            product_id,
            name: product.name,
            category: product.category,
            unit: product.unit,
            image_url: product.image_url,
            quantity,
            expires_on,
            stocked_on: stocked_on.unwrap_or_else(|| chrono::Local::now().date_naive()),
        });
        Ok(())
    }

    async fn remove_entry(
        &self,
        fridge_id: FridgeId,
        product_id: ProductId,
    ) -> Result<(), GatewayError> {
        if let Some(entries) = self.entries.lock().unwrap().get_mut(&fridge_id) {
            entries.retain(|e| e.product_id != product_id);
        }
        Ok(())
    }

    async fn update_entry(
        &self,
        entry_id: EntryId,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
        stocked_on: NaiveDate,
    ) -> Result<(), GatewayError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .values_mut()
            .flatten()
            .find(|e| e.entry_id == entry_id)
            .ok_or_else(|| GatewayError::NotFound(format!("entry {entry_id}")))?;
        entry.quantity = quantity;
        entry.expires_on = expires_on;
        entry.stocked_on = stocked_on;
        Ok(())
    }
}

// =============================================================================
// Builders
// =============================================================================

#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[must_use]
pub fn quantity(raw: &str) -> Quantity {
    raw.parse().unwrap()
}

#[must_use]
pub fn fridge(id: i32, user: i32, title: &str) -> Fridge {
    Fridge {
        fridge_id: FridgeId::new(id),
        user_id: UserId::new(user),
        title: title.to_owned(),
    }
}

#[must_use]
pub fn product(id: i32, user: i32, name: &str, category: Option<&str>, unit: &str) -> Product {
    Product {
        product_id: ProductId::new(id),
        user_id: UserId::new(user),
        name: name.to_owned(),
        category: category.map(str::to_owned),
        unit: unit.to_owned(),
        image_url: None,
        barcode_ref: None,
    }
}

#[must_use]
pub fn entry(id: i32, product_id: i32, name: &str, expires_on: Option<NaiveDate>) -> FridgeEntry {
    FridgeEntry {
        entry_id: EntryId::new(id),
        product_id: ProductId::new(product_id),
        name: name.to_owned(),
        category: None,
        unit: "pcs".to_owned(),
        image_url: None,
        quantity: quantity("1"),
        expires_on,
        stocked_on: date(2024, 6, 1),
    }
}
