//! Error types for the feedback service.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`FeedbackError`]: Errors returned by service operations
//! - [`StorageError`]: Database operation errors
//! - [`ServerError`]: HTTP listener errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Returned from the binary's startup path. It wraps all subsystem errors
/// for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Feedback operation error.
    #[error("Feedback error: {0}")]
    Feedback(#[from] FeedbackError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Server error.
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors returned by the feedback service operations.
///
/// Every variant leaves the store unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Caller input is missing or empty.
    #[error("{message}")]
    Validation {
        /// What is wrong with the input.
        message: String,
    },

    /// The request payload could not be decoded.
    #[error("{message}")]
    MalformedRequest {
        /// What could not be decoded, for the caller.
        message: String,
    },

    /// Unknown listing action requested.
    #[error("Invalid GET action '{action}'. Use action=list")]
    InvalidAction {
        /// The action that was requested.
        action: String,
    },

    /// The store could not complete the operation.
    #[error("{0}")]
    Store(#[from] StorageError),
}

impl FeedbackError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a malformed-request error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Returns true if the caller can fix this by correcting the request.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::MalformedRequest { .. } | Self::InvalidAction { .. }
        )
    }
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed.
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// The operation did not finish within the store timeout.
    #[error("Store operation timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// HTTP server errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// Could not bind the listener.
    #[error("Failed to bind {address}: {message}")]
    BindFailed {
        /// The address that could not be bound.
        address: String,
        /// Description of the failure.
        message: String,
    },

    /// The server stopped with an I/O error.
    #[error("Server stopped: {message}")]
    Serve {
        /// Description of the failure.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
