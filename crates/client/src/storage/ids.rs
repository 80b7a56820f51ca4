//! Identity generation for locally created records.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use frostbox_core::ShoppingItemId;

/// Source of identities for records created on this device.
///
/// Injected into [`super::ShoppingListStore`] so uniqueness is a property
/// of the generator, not a timing accident, and so tests can pin ids.
pub trait IdGenerator {
    /// Issue the next identity. Every call must return a value distinct
    /// from all values previously issued by this generator.
    fn next_id(&self) -> ShoppingItemId;
}

/// Wall-clock generator: millisecond timestamps with a monotonic fallback.
///
/// Ids are the current Unix time in milliseconds, which keeps them
/// human-correlatable with creation time. Two calls inside the same
/// millisecond cannot collide: the generator never issues a value less
/// than or equal to the previous one, stepping past the clock when the
/// clock has not advanced.
#[derive(Debug, Default)]
pub struct SystemIdGenerator {
    last: Mutex<i64>,
}

impl SystemIdGenerator {
    /// Create a generator with no issued ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SystemIdGenerator {
    fn next_id(&self) -> ShoppingItemId {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now().timestamp_millis();
        *last = now.max(*last + 1);
        ShoppingItemId::new(*last)
    }
}
