//! `FeedbackStore` implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::FeedbackStore;

use super::core::SqliteStorage;
use super::types::{FeedbackRecord, ListFilter, StatusCounts};

#[async_trait]
impl FeedbackStore for SqliteStorage {
    async fn insert(&self, text: &str) -> Result<FeedbackRecord, StorageError> {
        self.insert_feedback(text).await
    }

    async fn list(&self, filter: ListFilter) -> Result<Vec<FeedbackRecord>, StorageError> {
        self.list_feedback(filter).await
    }

    async fn count_by_status(&self) -> Result<StatusCounts, StorageError> {
        Self::count_by_status(self).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Self::ping(self).await
    }
}
