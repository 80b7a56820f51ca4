//! Dashboard read aggregation.
//!
//! Merges remote inventory reads with the expiry classifier into a single
//! summary. This is a best-effort view: any slice the service cannot
//! provide degrades to zero/empty with a logged warning, and callers
//! treat an empty result as "unknown", not as proof of absence. The
//! summary is recomputed on every call - "today" advances, so nothing
//! here is cacheable.

use chrono::NaiveDate;
use serde::Serialize;

use frostbox_core::{Freshness, UserId};

use crate::gateway::{FridgeEntry, InventoryGateway};

/// Counts and expiry partitions for the dashboard.
///
/// `expiring_soon` and `expired` cover the reference fridge only: the
/// first fridge in the order the service returns them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSummary {
    pub fridge_count: usize,
    pub product_count: usize,
    pub expiring_soon: Vec<FridgeEntry>,
    pub expired: Vec<FridgeEntry>,
}

/// Build the dashboard summary for `user_id` as of `today`.
///
/// The fridge and product lists are fetched concurrently; the entry fetch
/// for the reference fridge follows the fridge fetch (it needs the id).
/// With zero fridges no entry fetch is attempted at all. This function
/// never fails - gateway errors degrade the affected slice.
pub async fn summarize<G: InventoryGateway>(
    gateway: &G,
    user_id: UserId,
    today: NaiveDate,
) -> DashboardSummary {
    let (fridges, products) = tokio::join!(
        gateway.list_fridges(user_id),
        gateway.list_products(user_id)
    );

    let fridges = fridges.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "fridge list unavailable, dashboard shows none");
        Vec::new()
    });
    let products = products.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "product list unavailable, dashboard shows none");
        Vec::new()
    });

    let mut summary = DashboardSummary {
        fridge_count: fridges.len(),
        product_count: products.len(),
        ..DashboardSummary::default()
    };

    let Some(reference) = fridges.first() else {
        return summary;
    };

    let entries = match gateway.list_entries(reference.fridge_id).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                error = %e,
                fridge_id = %reference.fridge_id,
                "fridge contents unavailable, dashboard shows no expiry warnings"
            );
            Vec::new()
        }
    };

    for entry in entries {
        match entry.freshness(today) {
            Freshness::ExpiringSoon => summary.expiring_soon.push(entry),
            Freshness::Expired => summary.expired.push(entry),
            Freshness::Fresh => {}
        }
    }

    summary
}
