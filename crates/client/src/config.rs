//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FROSTBOX_API_URL` - Base URL of the inventory service
//!   (e.g., `http://localhost:5000`)
//!
//! ## Optional
//! - `FROSTBOX_DATA_DIR` - Directory for device-local state
//!   (default: `.frostbox`)
//! - `FROSTBOX_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_DATA_DIR: &str = ".frostbox";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Inventory service connection settings.
    pub gateway: GatewayConfig,
    /// Directory holding device-local state (shopping list, session).
    pub data_dir: PathBuf,
}

/// Inventory service connection settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = normalize_base_url("FROSTBOX_API_URL", &get_required_env("FROSTBOX_API_URL")?)?;
        let timeout_secs = get_env_or_default(
            "FROSTBOX_HTTP_TIMEOUT_SECS",
            &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("FROSTBOX_HTTP_TIMEOUT_SECS".to_owned(), e.to_string())
        })?;
        let data_dir = PathBuf::from(get_env_or_default("FROSTBOX_DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self {
            gateway: GatewayConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            data_dir,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Validate a service base URL and strip any trailing slash.
fn normalize_base_url(var_name: &str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_owned(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_owned(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_owned(),
            "URL must have a host".to_owned(),
        ));
    }

    Ok(raw.trim_end_matches('/').to_owned())
}
