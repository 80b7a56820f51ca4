//! Domain types for the remote inventory service.
//!
//! These double as the wire types: the service speaks flat JSON records,
//! so there is no separate conversion layer. Identities are numeric and
//! calendar dates travel as `YYYY-MM-DD` strings (see [`date_string`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use frostbox_core::{EntryId, FridgeId, Freshness, ProductId, Quantity, UserId, classify};

// =============================================================================
// Entities
// =============================================================================

/// A named storage container owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fridge {
    pub fridge_id: FridgeId,
    pub user_id: UserId,
    pub title: String,
}

/// A reusable product definition a user can stock in any fridge.
///
/// Identity is immutable once created; name, category, unit and the
/// references can be edited through the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Unit the quantity is measured in (e.g., "L", "pcs").
    pub unit: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub barcode_ref: Option<String>,
}

/// One product stocked in one fridge.
///
/// The product fields (`name` through `image_url`) are denormalized by the
/// service so listing a fridge needs no join on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FridgeEntry {
    pub entry_id: EntryId,
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub unit: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: Quantity,
    /// Expiry day, if the item is perishable. Encoded as "" when absent.
    #[serde(default, with = "date_string")]
    pub expires_on: Option<NaiveDate>,
    /// Day the item was put into the fridge.
    pub stocked_on: NaiveDate,
}

impl FridgeEntry {
    /// Classify this entry's expiry against a reference day.
    #[must_use]
    pub fn freshness(&self, today: NaiveDate) -> Freshness {
        classify(self.expires_on, today)
    }
}

// =============================================================================
// Request payloads
// =============================================================================

/// Fields for creating or editing a product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Option<String>,
    /// Unit the quantity is measured in (e.g., "L", "pcs").
    pub unit: String,
    pub image_url: Option<String>,
    pub barcode_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateFridgeRequest {
    pub user_id: UserId,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RenameFridgeRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateProductRequest {
    pub user_id: UserId,
    #[serde(flatten)]
    pub product: NewProduct,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StockEntryRequest {
    pub product_id: ProductId,
    pub quantity: Quantity,
    #[serde(with = "date_string")]
    pub expires_on: Option<NaiveDate>,
    pub stocked_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateEntryRequest {
    pub quantity: Quantity,
    #[serde(with = "date_string")]
    pub expires_on: Option<NaiveDate>,
    pub stocked_on: NaiveDate,
}

/// Error body returned by the service: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}

// =============================================================================
// Date codec
// =============================================================================

/// Serde codec for optional calendar dates on the wire.
///
/// The service encodes a missing expiry as the empty string rather than
/// null, so `Option<NaiveDate>` maps to `"YYYY-MM-DD"` or `""`.
pub mod date_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Wire format for calendar dates.
    pub const FORMAT: &str = "%Y-%m-%d";

    /// Serialize `None` as `""` and `Some(date)` as `"YYYY-MM-DD"`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    /// Deserialize `""` as `None`, anything else as a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error for non-empty strings that are not
    /// valid calendar dates.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
