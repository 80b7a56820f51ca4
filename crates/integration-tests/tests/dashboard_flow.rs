//! Integration tests for the dashboard aggregation.
//!
//! Exercises `summarize` end-to-end against the stub service: the expiry
//! partitioning scenario, the zero-fridge short-circuit, degradation when
//! the service is down, and independence from the local shopping list.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::Ordering;

use frostbox_client::dashboard::summarize;
use frostbox_client::storage::{FileStore, ShoppingListStore};
use frostbox_core::{EntryId, UserId};

use frostbox_integration_tests::{StubInventory, date, entry, fridge, product, quantity};

fn seeded_service() -> StubInventory {
    let service = StubInventory::new();
    service.push_fridge(fridge(3, 1, "Kitchen Fridge"));
    service.push_product(product(7, 1, "Milk", Some("Dairy"), "L"));
    service.push_product(product(8, 1, "Eggs", None, "pcs"));
    service
}

// =============================================================================
// Expiry partitioning
// =============================================================================

#[tokio::test]
async fn test_partition_scenario() {
    let today = date(2024, 6, 10);
    let service = seeded_service();
    let kitchen = frostbox_core::FridgeId::new(3);
    service.push_entry(kitchen, entry(1, 7, "Old milk", Some(date(2024, 6, 9))));
    service.push_entry(kitchen, entry(2, 7, "Milk", Some(date(2024, 6, 10))));
    service.push_entry(kitchen, entry(3, 8, "Eggs", Some(date(2024, 6, 17))));
    service.push_entry(kitchen, entry(4, 8, "Fresh eggs", Some(date(2024, 6, 18))));
    service.push_entry(kitchen, entry(5, 8, "Salt", None));

    let summary = summarize(&service, UserId::new(1), today).await;

    assert_eq!(summary.fridge_count, 1);
    assert_eq!(summary.product_count, 2);

    let soon: Vec<_> = summary.expiring_soon.iter().map(|e| e.entry_id).collect();
    assert_eq!(soon, [EntryId::new(2), EntryId::new(3)]);

    let expired: Vec<_> = summary.expired.iter().map(|e| e.entry_id).collect();
    assert_eq!(expired, [EntryId::new(1)]);
}

#[tokio::test]
async fn test_reference_fridge_is_the_first_listed() {
    let service = seeded_service();
    let pantry = frostbox_core::FridgeId::new(9);
    service.push_fridge(fridge(9, 1, "Pantry"));
    // Only the second fridge has an expired item; it must not show up.
    service.push_entry(pantry, entry(1, 7, "Forgotten milk", Some(date(2020, 1, 1))));

    let summary = summarize(&service, UserId::new(1), date(2024, 6, 10)).await;
    assert_eq!(summary.fridge_count, 2);
    assert!(summary.expired.is_empty());
    assert_eq!(service.entry_calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Short-circuits and degradation
// =============================================================================

#[tokio::test]
async fn test_zero_fridges_never_fetches_contents() {
    let service = StubInventory::new();
    service.push_product(product(7, 1, "Milk", Some("Dairy"), "L"));

    let summary = summarize(&service, UserId::new(1), date(2024, 6, 10)).await;

    assert_eq!(summary.fridge_count, 0);
    assert_eq!(summary.product_count, 1);
    assert!(summary.expiring_soon.is_empty());
    assert!(summary.expired.is_empty());
    assert_eq!(service.entry_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_total_outage_degrades_to_empty_summary() {
    let service = seeded_service();
    service.fail_fridges.store(true, Ordering::SeqCst);
    service.fail_products.store(true, Ordering::SeqCst);

    let summary = summarize(&service, UserId::new(1), date(2024, 6, 10)).await;

    assert_eq!(summary.fridge_count, 0);
    assert_eq!(summary.product_count, 0);
    assert!(summary.expiring_soon.is_empty());
    assert!(summary.expired.is_empty());
    // No fridge id to scope by, so contents were never requested.
    assert_eq!(service.entry_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_contents_outage_keeps_counts() {
    let service = seeded_service();
    service.fail_entries.store(true, Ordering::SeqCst);

    let summary = summarize(&service, UserId::new(1), date(2024, 6, 10)).await;

    assert_eq!(summary.fridge_count, 1);
    assert_eq!(summary.product_count, 2);
    assert!(summary.expiring_soon.is_empty());
    assert!(summary.expired.is_empty());
}

// =============================================================================
// Independence of local and remote state
// =============================================================================

#[tokio::test]
async fn test_shopping_list_readable_while_service_is_down() {
    let dir = tempfile::tempdir().unwrap();
    let store = ShoppingListStore::new(FileStore::open(dir.path()).unwrap());
    store
        .add(frostbox_client::models::NewShoppingItem {
            product_id: frostbox_core::ProductId::new(7),
            name: "Milk".to_owned(),
            category: None,
            unit: "L".to_owned(),
            image_url: None,
            quantity: quantity("2"),
            expires_on: None,
            fridge_id: frostbox_core::FridgeId::new(3),
            fridge_title: "Kitchen Fridge".to_owned(),
        })
        .unwrap();

    let service = StubInventory::new();
    service.fail_fridges.store(true, Ordering::SeqCst);
    service.fail_products.store(true, Ordering::SeqCst);

    // The dashboard degrades; the local list is untouched by the outage.
    let summary = summarize(&service, UserId::new(1), date(2024, 6, 10)).await;
    assert_eq!(summary.fridge_count, 0);
    assert_eq!(store.try_list().unwrap().len(), 1);
}
