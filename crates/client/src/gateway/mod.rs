//! Remote inventory service client.
//!
//! # Architecture
//!
//! - The service is the source of truth for users' fridges, products and
//!   fridge contents - NO local sync, direct API calls per read.
//! - [`InventoryGateway`] is the seam: the aggregation layer and the CLI
//!   are generic over it, and tests substitute an in-memory stub.
//! - [`InventoryClient`] is the production implementation: plain REST +
//!   JSON over `reqwest`.
//!
//! Failures carry no retry or partial-result semantics; each call either
//! yields a typed result or a [`GatewayError`]. Callers that must not
//! fail (the dashboard) degrade on error rather than propagate.
//!
//! # Example
//!
//! ```rust,ignore
//! use frostbox_client::gateway::{InventoryClient, InventoryGateway};
//!
//! let client = InventoryClient::new(&config.gateway);
//! let fridges = client.list_fridges(user_id).await?;
//! let entries = client.list_entries(fridges[0].fridge_id).await?;
//! ```

mod http;
pub mod types;

pub use http::InventoryClient;
pub use types::{Fridge, FridgeEntry, NewProduct, Product};

use chrono::NaiveDate;
use thiserror::Error;

use frostbox_core::{EntryId, FridgeId, ProductId, Quantity, UserId};

/// Errors that can occur when talking to the inventory service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport failed (connection, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The response body did not parse as the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Request/response contract of the remote inventory service.
///
/// Methods mirror the service's resources: fridges, products, and the
/// entries stocked in a fridge. All mutations are fire-and-acknowledge -
/// the service returns no body worth keeping, so they resolve to `()`.
#[allow(async_fn_in_trait)]
pub trait InventoryGateway {
    /// All fridges owned by `user_id`, in service order.
    async fn list_fridges(&self, user_id: UserId) -> Result<Vec<Fridge>, GatewayError>;

    /// A single fridge by id.
    async fn get_fridge(&self, fridge_id: FridgeId) -> Result<Fridge, GatewayError>;

    /// Create a fridge titled `title` for `user_id`.
    async fn create_fridge(&self, user_id: UserId, title: &str) -> Result<(), GatewayError>;

    /// Rename a fridge.
    async fn update_fridge(&self, fridge_id: FridgeId, title: &str) -> Result<(), GatewayError>;

    /// Delete a fridge and its contents.
    async fn delete_fridge(&self, fridge_id: FridgeId) -> Result<(), GatewayError>;

    /// All products defined by `user_id`.
    async fn list_products(&self, user_id: UserId) -> Result<Vec<Product>, GatewayError>;

    /// Define a new product for `user_id`.
    async fn create_product(
        &self,
        user_id: UserId,
        product: &NewProduct,
    ) -> Result<(), GatewayError>;

    /// Edit a product definition. Identity is immutable.
    async fn update_product(
        &self,
        product_id: ProductId,
        product: &NewProduct,
    ) -> Result<(), GatewayError>;

    /// Delete a product definition.
    async fn delete_product(&self, product_id: ProductId) -> Result<(), GatewayError>;

    /// Contents of one fridge, denormalized with product fields.
    async fn list_entries(&self, fridge_id: FridgeId) -> Result<Vec<FridgeEntry>, GatewayError>;

    /// Stock a product in a fridge. A missing `stocked_on` defaults to
    /// the current day.
    async fn add_entry(
        &self,
        fridge_id: FridgeId,
        product_id: ProductId,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
        stocked_on: Option<NaiveDate>,
    ) -> Result<(), GatewayError>;

    /// Remove a product from a fridge entirely.
    async fn remove_entry(
        &self,
        fridge_id: FridgeId,
        product_id: ProductId,
    ) -> Result<(), GatewayError>;

    /// Update quantity and dates of one stocked entry.
    async fn update_entry(
        &self,
        entry_id: EntryId,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
        stocked_on: NaiveDate,
    ) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::NotFound("fridge 9".to_owned());
        assert_eq!(err.to_string(), "not found: fridge 9");

        let err = GatewayError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to store product.".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "service returned 500 Internal Server Error: Failed to store product."
        );
    }
}
