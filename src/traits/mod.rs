//! Trait definitions for mockable dependencies.
//!
//! This module defines:
//! - [`FeedbackStore`]: Feedback persistence abstraction
//!
//! # Mocking
//!
//! Traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::{FeedbackRecord, ListFilter, StatusCounts};

/// Feedback store trait for mocking.
///
/// This trait abstracts database operations so the service can be
/// constructed over a real store or a test double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Insert a record with status `new` and a store-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn insert(&self, text: &str) -> Result<FeedbackRecord, StorageError>;

    /// List records matching `filter`, ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn list(&self, filter: ListFilter) -> Result<Vec<FeedbackRecord>, StorageError>;

    /// Count records grouped by status.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn count_by_status(&self) -> Result<StatusCounts, StorageError>;

    /// Check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database is unreachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
