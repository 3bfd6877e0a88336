//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use feedback_service::config::{Config, LogFormat};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: "./data/feedback.db".to_string(),
//!     bind_address: "127.0.0.1:8080".parse().unwrap(),
//!     log_level: "info".to_string(),
//!     log_format: LogFormat::Text,
//!     store_timeout_ms: 5000,
//!     max_connections: 5,
//! };
//!
//! assert_eq!(config.storage_options().timeout_ms, 5000);
//! ```

mod validation;

pub use validation::{
    validate_config, MAX_CONNECTIONS, MAX_STORE_TIMEOUT_MS, MIN_STORE_TIMEOUT_MS,
};

use std::net::SocketAddr;

use crate::error::ConfigError;
use crate::storage::{StorageOptions, DEFAULT_MAX_CONNECTIONS, DEFAULT_STORE_TIMEOUT_MS};

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/feedback.db";

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database path.
    pub database_path: String,
    /// Address the HTTP server listens on.
    pub bind_address: SocketAddr,
    /// Log level or `EnvFilter` directive.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Upper bound for each store operation, in milliseconds.
    pub store_timeout_ms: u64,
    /// Connection pool size.
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `./data/feedback.db`)
    /// - `BIND_ADDRESS`: Listen address (default: `0.0.0.0:8080`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `LOG_FORMAT`: `text` or `json` (default: `text`)
    /// - `STORE_TIMEOUT_MS`: Store operation timeout (default: `5000`)
    /// - `MAX_CONNECTIONS`: Connection pool size (default: `5`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value cannot be parsed or fails
    /// validation (see [`validate_config`]).
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.into())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "BIND_ADDRESS".into(),
                reason: format!("must be a socket address like 0.0.0.0:8080 ({e})"),
            })?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(val) => LogFormat::parse(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: "LOG_FORMAT".into(),
                reason: "must be 'text' or 'json'".into(),
            })?,
            Err(_) => LogFormat::default(),
        };

        let store_timeout_ms = parse_env_u64("STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT_MS)?;
        let max_connections = parse_env_u32("MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let config = Self {
            database_path,
            bind_address,
            log_level,
            log_format,
            store_timeout_ms,
            max_connections,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Store settings derived from this configuration.
    #[must_use]
    pub const fn storage_options(&self) -> StorageOptions {
        StorageOptions {
            max_connections: self.max_connections,
            timeout_ms: self.store_timeout_ms,
        }
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
