//! Core `SQLite` storage implementation.
//!
//! This module provides the main [`SqliteStorage`] struct and core database operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use sqlx::query::Query;
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions,
    SqliteRow,
};
use sqlx::Sqlite;
use std::future::Future;
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Primary result code for `SQLITE_BUSY`; extended codes keep it in the low byte.
const SQLITE_BUSY: i32 = 5;

/// Default per-operation timeout in milliseconds.
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection pool and timeout settings for [`SqliteStorage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageOptions {
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Upper bound for acquiring a connection and for each query.
    pub timeout_ms: u64,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
        }
    }
}

/// `SQLite` storage backend.
///
/// Provides persistent storage for feedback records.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
    pub(crate) timeout_ms: u64,
}

impl SqliteStorage {
    /// Get a clone of the connection pool.
    #[must_use]
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Per-operation timeout in milliseconds.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Create a new `SQLite` storage instance with default options.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new(database_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open(database_path, StorageOptions::default()).await
    }

    /// Open (creating if missing) the database at `database_path`.
    ///
    /// Parent directories are created as needed and migrations are applied.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails, or
    /// [`StorageError::MigrationFailed`] if the schema cannot be applied.
    pub async fn open(
        database_path: impl AsRef<Path>,
        options: StorageOptions,
    ) -> Result<Self, StorageError> {
        let path = database_path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create database directory: {e}"),
            })?;
        }

        let connect_options =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", path.display()))
                .map_err(|e| StorageError::ConnectionFailed {
                    message: format!("Invalid database path: {e}"),
                })?
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_millis(options.timeout_ms))
                .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(Duration::from_millis(options.timeout_ms))
            .connect_with(connect_options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to connect to database: {e}"),
            })?;

        let storage = Self {
            pool,
            timeout_ms: options.timeout_ms,
        };
        storage.run_migrations().await?;

        tracing::debug!(path = %path.display(), "feedback store opened");
        Ok(storage)
    }

    /// Create a new in-memory `SQLite` storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            })?
            .journal_mode(SqliteJournalMode::Wal);

        // Each connection to `:memory:` is a separate database, so the pool
        // must hold exactly one connection and never recycle it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let storage = Self {
            pool,
            timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
        };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Run database migrations.
    ///
    /// Each migration is idempotent (uses IF NOT EXISTS).
    pub(crate) async fn run_migrations(&self) -> Result<(), StorageError> {
        let schema_001 = include_str!("../../migrations/001_initial_schema.sql");
        sqlx::query(schema_001)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::MigrationFailed {
                version: "001".to_string(),
                message: format!("Failed to run migration 001: {e}"),
            })?;

        Ok(())
    }

    /// Run a read under the store timeout.
    ///
    /// Only for statements that change nothing: on expiry the future is
    /// dropped mid-flight. Driver errors go through [`Self::driver_error`];
    /// expiry becomes [`StorageError::Timeout`].
    pub(crate) async fn bounded<T, F>(&self, query: &str, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(Duration::from_millis(self.timeout_ms), fut).await {
            Ok(result) => result.map_err(|e| self.driver_error(query, &e)),
            Err(_) => Err(self.timed_out(query)),
        }
    }

    /// Run a write returning one row, within the store timeout.
    ///
    /// The pool's `acquire_timeout` bounds getting a connection. What is left
    /// of the budget becomes that connection's `busy_timeout`, so `SQLite`
    /// itself gives up on the lock. The statement always runs to completion:
    /// an error means nothing was written.
    pub(crate) async fn write_one<'q>(
        &self,
        query: &str,
        statement: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Result<SqliteRow, StorageError> {
        let started = Instant::now();
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| self.driver_error(query, &e))?;

        let remaining = Duration::from_millis(self.timeout_ms).saturating_sub(started.elapsed());
        let remaining_ms = u64::try_from(remaining.as_millis()).unwrap_or(self.timeout_ms);
        if remaining_ms == 0 {
            return Err(self.timed_out(query));
        }

        sqlx::query(&format!("PRAGMA busy_timeout = {remaining_ms}"))
            .execute(&mut *conn)
            .await
            .map_err(|e| self.driver_error(query, &e))?;

        statement
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| self.driver_error(query, &e))
    }

    /// Map a driver error. Pool exhaustion and lock contention past the
    /// deadline are [`StorageError::Timeout`]; the rest are
    /// [`StorageError::QueryFailed`].
    fn driver_error(&self, query: &str, err: &sqlx::Error) -> StorageError {
        let busy = err
            .as_database_error()
            .and_then(|db| db.code())
            .and_then(|code| code.parse::<i32>().ok())
            .is_some_and(|code| code & 0xff == SQLITE_BUSY);

        if busy || matches!(err, sqlx::Error::PoolTimedOut) {
            self.timed_out(query)
        } else {
            Self::query_error(query, format!("{err}"))
        }
    }

    fn timed_out(&self, query: &str) -> StorageError {
        tracing::error!(query, timeout_ms = self.timeout_ms, "store operation timed out");
        StorageError::Timeout {
            timeout_ms: self.timeout_ms,
        }
    }

    /// Parse a datetime string from the database.
    pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StorageError> {
        s.parse::<DateTime<Utc>>()
            .map_err(|e| StorageError::Internal {
                message: format!("Failed to parse datetime '{s}': {e}"),
            })
    }

    /// Create a query error with the given query name and message.
    pub(crate) fn query_error(query: &str, message: String) -> StorageError {
        StorageError::QueryFailed {
            query: query.to_string(),
            message,
        }
    }
}
