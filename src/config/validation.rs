//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed store timeout in milliseconds.
pub const MIN_STORE_TIMEOUT_MS: u64 = 100;

/// Maximum allowed store timeout in milliseconds (1 minute).
pub const MAX_STORE_TIMEOUT_MS: u64 = 60_000;

/// Maximum allowed connection pool size.
pub const MAX_CONNECTIONS: u32 = 64;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `DATABASE_PATH` must not be empty
/// - `STORE_TIMEOUT_MS` must be between 100 and 60000
/// - `MAX_CONNECTIONS` must be between 1 and 64
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    if config.store_timeout_ms < MIN_STORE_TIMEOUT_MS
        || config.store_timeout_ms > MAX_STORE_TIMEOUT_MS
    {
        return Err(ConfigError::InvalidValue {
            var: "STORE_TIMEOUT_MS".into(),
            reason: format!(
                "must be between {MIN_STORE_TIMEOUT_MS} and {MAX_STORE_TIMEOUT_MS} ms"
            ),
        });
    }

    if config.max_connections == 0 || config.max_connections > MAX_CONNECTIONS {
        return Err(ConfigError::InvalidValue {
            var: "MAX_CONNECTIONS".into(),
            reason: format!("must be between 1 and {MAX_CONNECTIONS}"),
        });
    }

    Ok(())
}
