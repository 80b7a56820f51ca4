//! Unified error handling.
//!
//! Each subsystem owns its error type ([`GatewayError`], [`StorageError`],
//! [`ValidationError`]); this module provides the top-level union used at
//! the application boundary. The propagation policy:
//!
//! - Gateway failures never abort an aggregation - the dashboard degrades
//!   and logs instead (see [`crate::dashboard`]).
//! - Local storage failures are tagged results; the degrading readers
//!   (`list`, `current`) implement the treat-as-empty policy explicitly.
//! - Validation failures always surface so the caller can show a
//!   corrective message.

use thiserror::Error;

use crate::config::ConfigError;
use crate::gateway::GatewayError;
use crate::storage::{StorageError, StoreError, ValidationError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote inventory service call failed.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Device-local storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Shopping-list operation failed.
    #[error("shopping list error: {0}")]
    Store(#[from] StoreError),

    /// Caller-supplied input failed a precondition.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No signed-in user is cached locally.
    #[error("no active session: {0}")]
    NoSession(&'static str),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation(ValidationError::EmptyField("name"));
        assert_eq!(err.to_string(), "validation error: name must not be empty");

        let err = AppError::NoSession("sign in first");
        assert_eq!(err.to_string(), "no active session: sign in first");
    }

    #[test]
    fn test_from_conversions() {
        fn takes_app_error(_: AppError) {}
        takes_app_error(StorageError::Corrupt("x".to_owned()).into());
        takes_app_error(ValidationError::EmptyField("unit").into());
        takes_app_error(GatewayError::NotFound("fridge".to_owned()).into());
    }
}
