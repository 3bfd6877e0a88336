//! Listing workflow tests.
//!
//! Tests listing requests end to end:
//! submit → move through statuses → list with filter and sort.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use feedback_service::error::FeedbackError;
use feedback_service::service::{FeedbackService, ListQuery};
use feedback_service::storage::{FeedbackStatus, ListFilter, SortOrder, SqliteStorage};
use serial_test::serial;
use tempfile::TempDir;

async fn create_seeded_service() -> (FeedbackService, SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SqliteStorage::new(temp_dir.path().join("list.db"))
        .await
        .expect("Failed to create storage");
    let service = FeedbackService::new(Arc::new(storage.clone()));

    for text in ["first", "second", "third", "fourth"] {
        service.submit(text).await.expect("submit");
    }
    let moves = [
        (1_i64, FeedbackStatus::Done),
        (3, FeedbackStatus::Done),
        (4, FeedbackStatus::InProgress),
    ];
    for (id, status) in moves {
        sqlx::query("UPDATE feedback SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&storage.get_pool())
            .await
            .expect("Failed to update status");
    }

    (service, storage, temp_dir)
}

fn query(status: Option<&str>, sort: Option<&str>, action: Option<&str>) -> ListQuery {
    ListQuery {
        status: status.map(str::to_string),
        sort: sort.map(str::to_string),
        action: action.map(str::to_string),
    }
}

#[tokio::test]
#[serial]
async fn test_list_query_filter_and_sort() {
    let (service, _storage, _temp_dir) = create_seeded_service().await;

    let newest = service
        .list_query(&query(Some("done"), None, Some("list")))
        .await
        .expect("list");
    let newest_ids: Vec<i64> = newest.records.iter().map(|r| r.id).collect();
    assert_eq!(newest_ids, vec![3, 1]);

    let oldest = service
        .list_query(&query(Some("done"), Some("oldest"), None))
        .await
        .expect("list");
    let oldest_ids: Vec<i64> = oldest.records.iter().map(|r| r.id).collect();
    assert_eq!(oldest_ids, vec![1, 3]);
    assert_eq!(oldest.count, 2);
}

#[tokio::test]
#[serial]
async fn test_list_query_rejects_unknown_action() {
    let (service, _storage, _temp_dir) = create_seeded_service().await;

    let err = service
        .list_query(&query(None, None, Some("delete")))
        .await
        .expect_err("should reject");
    assert_eq!(
        err,
        FeedbackError::InvalidAction {
            action: "delete".into()
        }
    );
}

#[tokio::test]
#[serial]
async fn test_list_filtered_matches_tolerant_list() {
    let (service, _storage, _temp_dir) = create_seeded_service().await;

    let typed = service
        .list_filtered(
            ListFilter::all()
                .with_status(FeedbackStatus::InProgress)
                .with_sort(SortOrder::Oldest),
        )
        .await
        .expect("list");
    let tolerant = service
        .list(Some("in-progress"), Some("oldest"))
        .await
        .expect("list");
    assert_eq!(typed, tolerant);
    assert_eq!(typed.records[0].text, "fourth");
}

#[tokio::test]
#[serial]
async fn test_filter_values_are_case_sensitive() {
    let (service, _storage, _temp_dir) = create_seeded_service().await;

    // Values outside the exact vocabulary fall back to the unfiltered listing
    let upper = service.list(Some("DONE"), None).await.expect("list");
    assert_eq!(upper.count, 4);
}

#[tokio::test]
#[serial]
async fn test_filter_input_is_not_sql() {
    let (service, _storage, _temp_dir) = create_seeded_service().await;

    let hostile = service
        .list(Some("done' OR '1'='1"), Some("created_at; DROP TABLE feedback"))
        .await
        .expect("list");
    assert_eq!(hostile.count, 4);

    // Table is still there
    let again = service.list(None, None).await.expect("list");
    assert_eq!(again.count, 4);
}

#[tokio::test]
#[serial]
async fn test_every_record_listed_exactly_once() {
    let (service, _storage, _temp_dir) = create_seeded_service().await;

    let all = service.list(None, None).await.expect("list");
    let mut by_status = 0;
    for status in FeedbackStatus::ALL {
        by_status += service
            .list(Some(status.as_str()), None)
            .await
            .expect("list")
            .count;
    }
    assert_eq!(by_status, all.count);

    let counts = service.summary().await.expect("summary");
    assert_eq!(counts.total, 4);
    assert_eq!(counts.get(FeedbackStatus::Done), 2);
}
