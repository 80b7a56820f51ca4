//! Device-local persistence.
//!
//! # Architecture
//!
//! All local state lives behind the [`KeyValueStore`] trait: a flat string
//! keyspace where each key holds one serialized JSON document. Production
//! uses [`FileStore`] (one file per key under the data directory); tests
//! use [`MemoryStore`]. The typed stores on top - [`ShoppingListStore`]
//! and [`SessionCache`] - own the serialization and the well-known keys.
//!
//! Local state is deliberately independent of the remote inventory
//! service. Nothing here is synchronized; the shopping list and the
//! cached session user are reconciled with remote data only by callers
//! reading both sides.
//!
//! # Keys
//!
//! - `shopping_list` - JSON array of shopping-list items, insertion order
//! - `user` - JSON record of the signed-in user
//!
//! Stored records carry no version tag. Evolution is additive only: new
//! fields must be optional with `#[serde(default)]` so records written by
//! older builds keep deserializing.

mod file;
mod ids;
mod memory;
mod session;
mod shopping_list;

pub use file::FileStore;
pub use ids::{IdGenerator, SystemIdGenerator};
pub use memory::MemoryStore;
pub use session::SessionCache;
pub use shopping_list::ShoppingListStore;

use thiserror::Error;

/// Well-known key holding the shopping list collection.
pub const SHOPPING_LIST_KEY: &str = "shopping_list";

/// Well-known key holding the cached session user.
pub const SESSION_USER_KEY: &str = "user";

/// Errors from the local storage substrate.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document exists but does not parse.
    #[error("stored data is corrupt: {0}")]
    Corrupt(String),

    /// Serializing a document for writing failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A caller-supplied value failed a precondition.
///
/// Validation failures are the one error category that is always surfaced
/// explicitly, never degraded to a silent no-op, so the caller can show a
/// corrective message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Errors from shopping-list write operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Flat string keyspace over some device-local storage medium.
///
/// Implementations are synchronous; callers are responsible for
/// serializing concurrent writers (the typed stores do full-collection
/// read-modify-write and provide no merge strategy).
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Absent keys are a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reject empty required text fields.
pub(crate) fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
