//! Local session cache.

use crate::models::User;

use super::{KeyValueStore, SESSION_USER_KEY, StorageError};

/// Cached copy of the signed-in user, one JSON record under
/// [`SESSION_USER_KEY`].
///
/// The account is owned by the remote auth service; this cache only tells
/// the client which user to scope gateway reads by between restarts.
pub struct SessionCache<S> {
    store: S,
}

impl<S: KeyValueStore> SessionCache<S> {
    /// Create a cache over the given storage substrate.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the cached user, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store is unreadable or the record
    /// does not parse.
    pub fn get(&self) -> Result<Option<User>, StorageError> {
        match self.store.get(SESSION_USER_KEY)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(format!("session user: {e}"))),
        }
    }

    /// Read the cached user, treating any storage failure as signed-out.
    #[must_use]
    pub fn current(&self) -> Option<User> {
        match self.get() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "session cache unreadable, treating as signed out");
                None
            }
        }
    }

    /// Cache `user`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    pub fn set(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(SESSION_USER_KEY, &raw)
    }

    /// Drop the cached record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the delete fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(SESSION_USER_KEY)
    }
}
