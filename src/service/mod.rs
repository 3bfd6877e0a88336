//! Feedback service.
//!
//! [`FeedbackService`] validates submissions and builds listing queries on
//! top of an injected [`FeedbackStore`]. It keeps no state between calls;
//! concurrent callers share one instance behind an `Arc`.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use feedback_service::service::FeedbackService;
//! use feedback_service::storage::SqliteStorage;
//!
//! let store = SqliteStorage::new("./data/feedback.db").await?;
//! let service = FeedbackService::new(Arc::new(store));
//! let submitted = service.submit("Great service!").await?;
//! let listing = service.list(None, None).await?;
//! ```

mod requests;

pub use requests::{ListQuery, SubmitRequest};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::FeedbackError;
use crate::storage::{FeedbackRecord, ListFilter, StatusCounts};
use crate::traits::FeedbackStore;

/// Message returned when the submitted text is missing or blank.
pub const TEXT_REQUIRED_MESSAGE: &str = "Feedback text is required.";

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Submitted {
    /// Identifier assigned by the store.
    pub id: i64,
    /// Insertion timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Records returned by a listing, with their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Matching records in the requested order.
    pub records: Vec<FeedbackRecord>,
    /// Number of records.
    pub count: usize,
}

impl Listing {
    fn new(records: Vec<FeedbackRecord>) -> Self {
        Self {
            count: records.len(),
            records,
        }
    }
}

/// Stateless feedback request handler.
#[derive(Clone)]
pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
}

impl std::fmt::Debug for FeedbackService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackService").finish_non_exhaustive()
    }
}

impl FeedbackService {
    /// Create a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    /// Submit feedback text.
    ///
    /// Surrounding whitespace is trimmed before storage. The store is not
    /// touched unless the trimmed text is non-empty.
    ///
    /// # Errors
    ///
    /// - [`FeedbackError::Validation`] if the text is empty after trimming
    /// - [`FeedbackError::Store`] if the insert fails; it is not retried
    pub async fn submit(&self, raw_text: &str) -> Result<Submitted, FeedbackError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(FeedbackError::validation(TEXT_REQUIRED_MESSAGE));
        }

        let record = self.store.insert(text).await.map_err(|e| {
            tracing::error!(error = %e, "feedback insert failed");
            FeedbackError::Store(e)
        })?;

        tracing::info!(id = record.id, "feedback submitted");
        Ok(Submitted {
            id: record.id,
            created_at: record.created_at,
        })
    }

    /// Submit feedback from a JSON request body.
    ///
    /// # Errors
    ///
    /// - [`FeedbackError::MalformedRequest`] if the body does not decode
    ///   into a [`SubmitRequest`]
    /// - [`FeedbackError::Validation`] if `feedback_text` is missing or blank
    /// - [`FeedbackError::Store`] if the insert fails
    pub async fn submit_json(&self, body: &[u8]) -> Result<Submitted, FeedbackError> {
        let request = SubmitRequest::from_json(body)?;
        let text = request
            .feedback_text
            .ok_or_else(|| FeedbackError::validation(TEXT_REQUIRED_MESSAGE))?;
        self.submit(&text).await
    }

    /// List feedback with tolerant parsing of the filter and sort values.
    ///
    /// An unrecognised `status` lists every record; an unrecognised `sort`
    /// falls back to newest first.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Store`] if the query cannot execute.
    pub async fn list(
        &self,
        status: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Listing, FeedbackError> {
        let query = ListQuery {
            status: status.map(str::to_string),
            sort: sort.map(str::to_string),
            action: None,
        };
        self.list_filtered(query.to_filter()).await
    }

    /// List feedback for a listing request.
    ///
    /// # Errors
    ///
    /// - [`FeedbackError::InvalidAction`] if `action` is present and not `list`
    /// - [`FeedbackError::Store`] if the query cannot execute
    pub async fn list_query(&self, query: &ListQuery) -> Result<Listing, FeedbackError> {
        query.check_action()?;
        self.list_filtered(query.to_filter()).await
    }

    /// List feedback matching an already-resolved filter.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Store`] if the query cannot execute.
    pub async fn list_filtered(&self, filter: ListFilter) -> Result<Listing, FeedbackError> {
        let records = self.store.list(filter).await.map_err(|e| {
            tracing::error!(error = %e, "feedback query failed");
            FeedbackError::Store(e)
        })?;

        tracing::debug!(
            status = filter.status.map(|s| s.as_str()),
            sort = filter.sort.as_str(),
            count = records.len(),
            "feedback listed"
        );
        Ok(Listing::new(records))
    }

    /// Count feedback grouped by status.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Store`] if the query cannot execute.
    pub async fn summary(&self) -> Result<StatusCounts, FeedbackError> {
        Ok(self.store.count_by_status().await?)
    }

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Store`] if the store does not answer.
    pub async fn health(&self) -> Result<(), FeedbackError> {
        self.store.ping().await.map_err(|e| {
            tracing::warn!(error = %e, "feedback store health check failed");
            FeedbackError::Store(e)
        })
    }
}
