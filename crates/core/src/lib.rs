//! Frostbox Core - Shared types library.
//!
//! This crate provides common types used across all Frostbox components:
//! - `client` - Inventory client library (gateway, local stores, dashboard)
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no file access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and quantities, plus
//!   the expiry classifier
//!
//! # Date handling
//!
//! All expiry and stocking dates are calendar days ([`chrono::NaiveDate`]),
//! never instants. Comparing two `NaiveDate` values compares calendar days
//! directly, which is what the expiry rules require.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
