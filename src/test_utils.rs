//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - Mock [`FeedbackStore`](crate::traits::FeedbackStore) factories
//! - Record fixtures
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::error::StorageError;
use crate::storage::{FeedbackRecord, StatusCounts};
use crate::traits::MockFeedbackStore;

/// Fixed base time for fixtures: 2024-01-15T10:30:00Z.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

/// Create a `new` record created `offset_secs` after [`base_time`].
#[must_use]
pub fn record_at(id: i64, text: &str, offset_secs: i64) -> FeedbackRecord {
    FeedbackRecord::new(id, text, base_time() + Duration::seconds(offset_secs))
}

/// Create a mock store with no expectations.
///
/// Any store call panics, which asserts that a code path never reaches
/// the store.
#[must_use]
pub fn mock_store_untouched() -> MockFeedbackStore {
    MockFeedbackStore::new()
}

/// Create a mock store that accepts inserts, assigning ids from 1.
///
/// # Example
///
/// ```ignore
/// let mock = mock_store_accepting_inserts();
/// assert_eq!(mock.insert("a").await.unwrap().id, 1);
/// assert_eq!(mock.insert("b").await.unwrap().id, 2);
/// ```
#[must_use]
pub fn mock_store_accepting_inserts() -> MockFeedbackStore {
    let next_id = AtomicI64::new(1);
    let mut mock = MockFeedbackStore::new();
    mock.expect_insert().returning(move |text| {
        let id = next_id.fetch_add(1, Ordering::SeqCst);
        Ok(record_at(id, text, id))
    });
    mock
}

/// Create a mock store whose listing always returns `records`.
#[must_use]
pub fn mock_store_with_records(records: Vec<FeedbackRecord>) -> MockFeedbackStore {
    let mut counts = StatusCounts::default();
    for record in &records {
        counts.add(record.status, 1);
    }

    let mut mock = MockFeedbackStore::new();
    mock.expect_list().returning(move |_| Ok(records.clone()));
    mock.expect_count_by_status().returning(move || Ok(counts));
    mock.expect_ping().returning(|| Ok(()));
    mock
}

/// Create a mock store where every operation fails with `error`.
///
/// # Example
///
/// ```ignore
/// let mock = mock_store_error(StorageError::Timeout { timeout_ms: 10 });
/// assert!(mock.ping().await.is_err());
/// ```
#[must_use]
pub fn mock_store_error(error: StorageError) -> MockFeedbackStore {
    let mut mock = MockFeedbackStore::new();

    let e = error.clone();
    mock.expect_insert().returning(move |_| Err(e.clone()));
    let e = error.clone();
    mock.expect_list().returning(move |_| Err(e.clone()));
    let e = error.clone();
    mock.expect_count_by_status().returning(move || Err(e.clone()));
    mock.expect_ping().returning(move || Err(error.clone()));

    mock
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ListFilter;
    use crate::traits::FeedbackStore;

    #[test]
    fn test_record_at_offsets() {
        let a = record_at(1, "a", 0);
        let b = record_at(2, "b", 30);
        assert_eq!((b.created_at - a.created_at).num_seconds(), 30);
    }

    #[tokio::test]
    async fn test_mock_store_accepting_inserts_counts_up() {
        let mock = mock_store_accepting_inserts();
        assert_eq!(mock.insert("a").await.unwrap().id, 1);
        assert_eq!(mock.insert("b").await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_mock_store_with_records() {
        let mock = mock_store_with_records(vec![record_at(1, "a", 0)]);
        assert_eq!(mock.list(ListFilter::all()).await.unwrap().len(), 1);
        assert_eq!(mock.count_by_status().await.unwrap().total, 1);
    }

    #[tokio::test]
    async fn test_mock_store_error() {
        let mock = mock_store_error(StorageError::Timeout { timeout_ms: 10 });
        assert!(mock.insert("a").await.is_err());
        assert!(mock.list(ListFilter::all()).await.is_err());
        assert!(mock.count_by_status().await.is_err());
        assert!(mock.ping().await.is_err());
    }
}
