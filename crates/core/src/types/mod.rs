//! Core types for Frostbox.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod freshness;
pub mod id;
pub mod quantity;

pub use freshness::{EXPIRING_SOON_WINDOW_DAYS, Freshness, classify};
pub use id::*;
pub use quantity::{Quantity, QuantityError};
