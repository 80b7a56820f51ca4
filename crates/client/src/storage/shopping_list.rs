//! The local shopping-list store.

use chrono::NaiveDate;

use frostbox_core::{Quantity, ShoppingItemId};

use crate::models::{NewShoppingItem, ShoppingListItem};

use super::{
    IdGenerator, KeyValueStore, SHOPPING_LIST_KEY, StorageError, StoreError, SystemIdGenerator,
    validate_required,
};

/// Durable, device-local shopping list.
///
/// The whole list is one JSON array under [`SHOPPING_LIST_KEY`], kept in
/// insertion order. Every mutation is a full-collection read-modify-write;
/// the store does not coordinate concurrent writers, so callers must
/// serialize mutations (the CLI does so trivially by being sequential).
///
/// The list is global within the data directory, not per-user, and is
/// never synchronized to the remote inventory service.
pub struct ShoppingListStore<S, G = SystemIdGenerator> {
    store: S,
    ids: G,
}

impl<S: KeyValueStore> ShoppingListStore<S> {
    /// Create a store issuing wall-clock ids.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            ids: SystemIdGenerator::new(),
        }
    }
}

impl<S: KeyValueStore, G: IdGenerator> ShoppingListStore<S, G> {
    /// Create a store with an explicit id generator.
    #[must_use]
    pub const fn with_id_generator(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    /// Read the list in insertion order.
    ///
    /// A missing document is an empty list. A document that exists but
    /// does not parse is [`StorageError::Corrupt`] - see [`Self::list`]
    /// for the degrading variant.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store is unreadable or the
    /// stored document is malformed.
    pub fn try_list(&self) -> Result<Vec<ShoppingListItem>, StorageError> {
        match self.store.get(SHOPPING_LIST_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Corrupt(format!("shopping list: {e}"))),
        }
    }

    /// Read the list, treating any storage failure as empty.
    ///
    /// This is the availability-over-correctness read used for display:
    /// an unreadable or corrupt store logs a warning and renders as an
    /// empty list rather than an error. Callers that need to distinguish
    /// "empty" from "broken" use [`Self::try_list`].
    #[must_use]
    pub fn list(&self) -> Vec<ShoppingListItem> {
        match self.try_list() {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "shopping list unreadable, showing empty");
                Vec::new()
            }
        }
    }

    /// Append a new item and return it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if a required text field is
    /// empty, [`StoreError::Storage`] if the list cannot be read back or
    /// written. A corrupt existing document fails the add rather than
    /// being silently overwritten; `clear` is the recovery path.
    pub fn add(&self, new: NewShoppingItem) -> Result<ShoppingListItem, StoreError> {
        validate_required("name", &new.name)?;
        validate_required("unit", &new.unit)?;
        validate_required("fridge_title", &new.fridge_title)?;

        let mut items = self.try_list()?;
        let item = ShoppingListItem {
            id: self.ids.next_id(),
            product_id: new.product_id,
            name: new.name,
            category: new.category,
            unit: new.unit,
            image_url: new.image_url,
            quantity: new.quantity,
            expires_on: new.expires_on,
            fridge_id: new.fridge_id,
            fridge_title: new.fridge_title,
        };
        items.push(item.clone());
        self.persist(&items)?;
        Ok(item)
    }

    /// Change quantity and expiry of an existing item, in place.
    ///
    /// Identity and the denormalized snapshot fields are never touched.
    /// Returns `Ok(false)` if no item with `id` exists (the collection is
    /// left unchanged).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the list cannot be read or
    /// written.
    pub fn update(
        &self,
        id: ShoppingItemId,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
    ) -> Result<bool, StoreError> {
        let mut items = self.try_list()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        item.quantity = quantity;
        item.expires_on = expires_on;
        self.persist(&items)?;
        Ok(true)
    }

    /// Remove the item with `id`. Removing an absent id is a no-op
    /// success - filtering by "not this id" is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the list cannot be read or written.
    pub fn remove(&self, id: ShoppingItemId) -> Result<(), StorageError> {
        let mut items = self.try_list()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(());
        }
        self.persist(&items)
    }

    /// Replace the list with an empty one. Idempotent, and also the
    /// recovery path for a corrupt document (it never reads).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.persist(&[])
    }

    fn persist(&self, items: &[ShoppingListItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(SHOPPING_LIST_KEY, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use frostbox_core::{FridgeId, ProductId};

    use crate::storage::MemoryStore;

    use super::*;

    fn milk(quantity: &str) -> NewShoppingItem {
        NewShoppingItem {
            product_id: ProductId::new(7),
            name: "Milk".to_owned(),
            category: Some("Dairy".to_owned()),
            unit: "L".to_owned(),
            image_url: None,
            quantity: quantity.parse().unwrap(),
            expires_on: NaiveDate::from_ymd_opt(2024, 6, 12),
            fridge_id: FridgeId::new(3),
            fridge_title: "Kitchen Fridge".to_owned(),
        }
    }

    #[test]
    fn test_add_then_list_roundtrip() {
        let store = ShoppingListStore::new(MemoryStore::new());
        let added = store.add(milk("2")).unwrap();

        let items = store.list();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, added.id);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.fridge_title, "Kitchen Fridge");
        assert_eq!(item.quantity.to_string(), "2");
        assert_eq!(item.expires_on, NaiveDate::from_ymd_opt(2024, 6, 12));
    }

    #[test]
    fn test_adds_preserve_insertion_order_and_distinct_ids() {
        let store = ShoppingListStore::new(MemoryStore::new());
        let first = store.add(milk("1")).unwrap();
        let mut second = milk("3");
        second.name = "Butter".to_owned();
        let second = store.add(second).unwrap();

        assert_ne!(first.id, second.id);
        let names: Vec<_> = store.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Milk", "Butter"]);
    }

    #[test]
    fn test_add_rejects_empty_required_fields() {
        let store = ShoppingListStore::new(MemoryStore::new());
        let mut nameless = milk("1");
        nameless.name = String::new();
        assert!(matches!(
            store.add(nameless),
            Err(StoreError::Validation(_))
        ));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_update_changes_only_quantity_and_expiry() {
        let store = ShoppingListStore::new(MemoryStore::new());
        let added = store.add(milk("2")).unwrap();

        let changed = store
            .update(added.id, "5".parse().unwrap(), None)
            .unwrap();
        assert!(changed);

        let items = store.list();
        let item = &items[0];
        assert_eq!(item.quantity.to_string(), "5");
        assert_eq!(item.expires_on, None);
        // Identity and snapshot fields untouched.
        assert_eq!(item.id, added.id);
        assert_eq!(item.name, added.name);
        assert_eq!(item.fridge_title, added.fridge_title);
    }

    #[test]
    fn test_update_missing_id_reports_false_and_changes_nothing() {
        let store = ShoppingListStore::new(MemoryStore::new());
        store.add(milk("2")).unwrap();
        let before = store.list();

        let changed = store
            .update(ShoppingItemId::new(999), "5".parse().unwrap(), None)
            .unwrap();
        assert!(!changed);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = ShoppingListStore::new(MemoryStore::new());
        let added = store.add(milk("2")).unwrap();

        store.remove(added.id).unwrap();
        assert!(store.list().is_empty());

        // Absent id: still a success, still unchanged.
        store.remove(added.id).unwrap();
        store.remove(ShoppingItemId::new(42)).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = ShoppingListStore::new(MemoryStore::new());
        store.add(milk("2")).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_corrupt_document_errors_on_try_list_and_degrades_on_list() {
        let kv = MemoryStore::new();
        kv.set(SHOPPING_LIST_KEY, "not json at all").unwrap();
        let store = ShoppingListStore::new(kv);

        assert!(matches!(store.try_list(), Err(StorageError::Corrupt(_))));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_refuses_to_overwrite_corrupt_document() {
        let kv = MemoryStore::new();
        kv.set(SHOPPING_LIST_KEY, "{broken").unwrap();
        let store = ShoppingListStore::new(kv);

        assert!(matches!(store.add(milk("1")), Err(StoreError::Storage(_))));

        // clear() is the recovery path: it never reads.
        store.clear().unwrap();
        store.add(milk("1")).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_injected_id_generator_pins_ids() {
        struct Sequence(std::sync::atomic::AtomicI64);
        impl IdGenerator for Sequence {
            fn next_id(&self) -> ShoppingItemId {
                ShoppingItemId::new(
                    self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst),
                )
            }
        }

        let store = ShoppingListStore::with_id_generator(
            MemoryStore::new(),
            Sequence(std::sync::atomic::AtomicI64::new(100)),
        );
        assert_eq!(store.add(milk("1")).unwrap().id, ShoppingItemId::new(100));
        assert_eq!(store.add(milk("1")).unwrap().id, ShoppingItemId::new(101));
    }
}
