//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Feedback insert and filtered/sorted listing
//! - Status counts and connectivity checks
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! `id` and `created_at` are assigned by the database on insert, and every
//! user-supplied value reaches SQL as a bound parameter.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, timeouts and helper functions
//! - `feedback`: Feedback operations
//! - `trait_impl`: `FeedbackStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use feedback_service::storage::SqliteStorage;
//!
//! let storage = SqliteStorage::new("./data/feedback.db").await?;
//! let record = storage.insert_feedback("Great service!").await?;
//! ```

mod core;
mod feedback;
mod trait_impl;
mod types;

pub use self::core::{
    SqliteStorage, StorageOptions, DEFAULT_MAX_CONNECTIONS, DEFAULT_STORE_TIMEOUT_MS,
};
pub use types::{FeedbackRecord, FeedbackStatus, ListFilter, SortOrder, StatusCounts};
