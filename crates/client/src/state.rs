//! Application state shared across commands.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::gateway::InventoryClient;
use crate::storage::{FileStore, SessionCache, ShoppingListStore, StorageError};

/// Application state wiring configuration, the gateway client and the
/// local stores together.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ClientConfig,
    gateway: InventoryClient,
    shopping_list: ShoppingListStore<FileStore>,
    session: SessionCache<FileStore>,
}

impl AppState {
    /// Build the state from configuration, opening the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the data directory cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, StorageError> {
        let gateway = InventoryClient::new(&config.gateway);
        let files = FileStore::open(&config.data_dir)?;
        let shopping_list = ShoppingListStore::new(files.clone());
        let session = SessionCache::new(files);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                gateway,
                shopping_list,
                session,
            }),
        })
    }

    /// Get a reference to the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get a reference to the inventory service client.
    #[must_use]
    pub fn gateway(&self) -> &InventoryClient {
        &self.inner.gateway
    }

    /// Get a reference to the local shopping-list store.
    #[must_use]
    pub fn shopping_list(&self) -> &ShoppingListStore<FileStore> {
        &self.inner.shopping_list
    }

    /// Get a reference to the local session cache.
    #[must_use]
    pub fn session(&self) -> &SessionCache<FileStore> {
        &self.inner.session
    }
}
