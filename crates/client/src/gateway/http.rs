//! REST client implementation of the inventory gateway.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use frostbox_core::{EntryId, FridgeId, ProductId, Quantity, UserId};

use crate::config::GatewayConfig;

use super::types::{
    ApiErrorBody, CreateFridgeRequest, CreateProductRequest, Fridge, FridgeEntry, NewProduct,
    Product, RenameFridgeRequest, StockEntryRequest, UpdateEntryRequest,
};
use super::{GatewayError, InventoryGateway};

/// Client for the remote inventory service.
///
/// Cheaply cloneable; the underlying connection pool is shared.
#[derive(Clone)]
pub struct InventoryClient {
    inner: Arc<InventoryClientInner>,
}

struct InventoryClientInner {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl InventoryClient {
    /// Create a new client for the service at `config.base_url`.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            inner: Arc::new(InventoryClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                timeout: config.timeout,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Map a non-success response to an error, favoring the service's
    /// `{"error": "..."}` body over raw text.
    fn status_error(status: StatusCode, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ApiErrorBody>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |parsed| parsed.error,
        );
        if status == StatusCode::NOT_FOUND {
            GatewayError::NotFound(message)
        } else {
            GatewayError::Status { status, message }
        }
    }

    /// GET `path` and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self
            .inner
            .client
            .get(self.endpoint(path))
            .timeout(self.inner.timeout)
            .send()
            .await?;

        let status = response.status();
        // Read the body as text first for better error diagnostics.
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "failed to parse inventory service response"
            );
            GatewayError::Parse(e)
        })
    }

    /// Send a mutation and discard the acknowledgement body.
    async fn ack(&self, request: reqwest::RequestBuilder) -> Result<(), GatewayError> {
        let response = request.timeout(self.inner.timeout).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &text));
        }
        Ok(())
    }

    async fn post_ack<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        self.ack(self.inner.client.post(self.endpoint(path)).json(body))
            .await
    }

    async fn put_ack<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        self.ack(self.inner.client.put(self.endpoint(path)).json(body))
            .await
    }

    async fn delete_ack(&self, path: &str) -> Result<(), GatewayError> {
        self.ack(self.inner.client.delete(self.endpoint(path))).await
    }
}

impl InventoryGateway for InventoryClient {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn list_fridges(&self, user_id: UserId) -> Result<Vec<Fridge>, GatewayError> {
        self.get_json(&format!("/fridges/user/{user_id}")).await
    }

    #[instrument(skip(self), fields(fridge_id = %fridge_id))]
    async fn get_fridge(&self, fridge_id: FridgeId) -> Result<Fridge, GatewayError> {
        self.get_json(&format!("/fridges/{fridge_id}")).await
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn create_fridge(&self, user_id: UserId, title: &str) -> Result<(), GatewayError> {
        let body = CreateFridgeRequest {
            user_id,
            title: title.to_owned(),
        };
        self.post_ack("/fridges/", &body).await
    }

    #[instrument(skip(self), fields(fridge_id = %fridge_id))]
    async fn update_fridge(&self, fridge_id: FridgeId, title: &str) -> Result<(), GatewayError> {
        let body = RenameFridgeRequest {
            title: title.to_owned(),
        };
        self.put_ack(&format!("/fridges/{fridge_id}"), &body).await
    }

    #[instrument(skip(self), fields(fridge_id = %fridge_id))]
    async fn delete_fridge(&self, fridge_id: FridgeId) -> Result<(), GatewayError> {
        self.delete_ack(&format!("/fridges/{fridge_id}")).await
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn list_products(&self, user_id: UserId) -> Result<Vec<Product>, GatewayError> {
        self.get_json(&format!("/products/user/{user_id}")).await
    }

    #[instrument(skip(self, product), fields(user_id = %user_id, name = %product.name))]
    async fn create_product(
        &self,
        user_id: UserId,
        product: &NewProduct,
    ) -> Result<(), GatewayError> {
        let body = CreateProductRequest {
            user_id,
            product: product.clone(),
        };
        self.post_ack("/products/", &body).await
    }

    #[instrument(skip(self, product), fields(product_id = %product_id))]
    async fn update_product(
        &self,
        product_id: ProductId,
        product: &NewProduct,
    ) -> Result<(), GatewayError> {
        self.put_ack(&format!("/products/{product_id}"), product)
            .await
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn delete_product(&self, product_id: ProductId) -> Result<(), GatewayError> {
        self.delete_ack(&format!("/products/{product_id}")).await
    }

    #[instrument(skip(self), fields(fridge_id = %fridge_id))]
    async fn list_entries(&self, fridge_id: FridgeId) -> Result<Vec<FridgeEntry>, GatewayError> {
        self.get_json(&format!("/fridges/{fridge_id}/contents"))
            .await
    }

    #[instrument(skip(self), fields(fridge_id = %fridge_id, product_id = %product_id))]
    async fn add_entry(
        &self,
        fridge_id: FridgeId,
        product_id: ProductId,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
        stocked_on: Option<NaiveDate>,
    ) -> Result<(), GatewayError> {
        let body = StockEntryRequest {
            product_id,
            quantity,
            expires_on,
            // Stocking date defaults to the day the entry is created.
            stocked_on: stocked_on.unwrap_or_else(|| Local::now().date_naive()),
        };
        self.post_ack(&format!("/fridges/{fridge_id}/store"), &body)
            .await
    }

    #[instrument(skip(self), fields(fridge_id = %fridge_id, product_id = %product_id))]
    async fn remove_entry(
        &self,
        fridge_id: FridgeId,
        product_id: ProductId,
    ) -> Result<(), GatewayError> {
        self.delete_ack(&format!("/fridges/{fridge_id}/remove/{product_id}"))
            .await
    }

    #[instrument(skip(self), fields(entry_id = %entry_id))]
    async fn update_entry(
        &self,
        entry_id: EntryId,
        quantity: Quantity,
        expires_on: Option<NaiveDate>,
        stocked_on: NaiveDate,
    ) -> Result<(), GatewayError> {
        let body = UpdateEntryRequest {
            quantity,
            expires_on,
            stocked_on,
        };
        self.put_ack(&format!("/fridges/update_item/{entry_id}"), &body)
            .await
    }
}
