//! Submission workflow tests.
//!
//! Tests the path from a raw JSON body to a stored record:
//! decode → validate → trim → insert → visible in listings.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use feedback_service::error::FeedbackError;
use feedback_service::service::{FeedbackService, TEXT_REQUIRED_MESSAGE};
use feedback_service::storage::{FeedbackStatus, SqliteStorage};
use serial_test::serial;
use tempfile::TempDir;

async fn create_test_service() -> (FeedbackService, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SqliteStorage::new(temp_dir.path().join("submit.db"))
        .await
        .expect("Failed to create storage");
    (FeedbackService::new(Arc::new(storage)), temp_dir)
}

#[tokio::test]
#[serial]
async fn test_submit_json_stores_record() {
    let (service, _temp_dir) = create_test_service().await;

    let submitted = service
        .submit_json(br#"{"feedback_text": "Great service!"}"#)
        .await
        .expect("submit");
    assert_eq!(submitted.id, 1);

    let listing = service.list(None, None).await.expect("list");
    assert_eq!(listing.count, 1);
    let record = &listing.records[0];
    assert_eq!(record.id, submitted.id);
    assert_eq!(record.text, "Great service!");
    assert_eq!(record.status, FeedbackStatus::New);
    assert_eq!(record.created_at, submitted.created_at);
}

#[tokio::test]
#[serial]
async fn test_submit_json_missing_text_is_validation_error() {
    let (service, _temp_dir) = create_test_service().await;

    let bodies: [&[u8]; 3] = [
        b"{}",
        br#"{"feedback_text": null}"#,
        br#"{"feedback_text": "   "}"#,
    ];
    for body in bodies {
        let err = service.submit_json(body).await.expect_err("should reject");
        assert_eq!(err, FeedbackError::validation(TEXT_REQUIRED_MESSAGE));
    }

    let listing = service.list(None, None).await.expect("list");
    assert_eq!(listing.count, 0);
}

#[tokio::test]
#[serial]
async fn test_submit_json_malformed_bodies() {
    let (service, _temp_dir) = create_test_service().await;

    let bodies: [&[u8]; 4] = [
        b"{oops",
        br#""just a string""#,
        br#"{"feedback_text": 5}"#,
        br#"{"feedback_text": "hi", "rating": 5}"#,
    ];
    for body in bodies {
        let err = service.submit_json(body).await.expect_err("should reject");
        assert!(
            matches!(err, FeedbackError::MalformedRequest { .. }),
            "unexpected error: {err:?}"
        );
        assert!(err.is_client_error());
    }

    let listing = service.list(None, None).await.expect("list");
    assert_eq!(listing.count, 0);
}

#[tokio::test]
#[serial]
async fn test_submit_preserves_inner_whitespace_and_unicode() {
    let (service, _temp_dir) = create_test_service().await;

    let text = "Line one\nLine two, ünïcödé ✓";
    service
        .submit(&format!("\n  {text}\t"))
        .await
        .expect("submit");

    let listing = service.list(None, None).await.expect("list");
    assert_eq!(listing.records[0].text, text);
}

#[tokio::test]
#[serial]
async fn test_sequential_ids_are_increasing() {
    let (service, _temp_dir) = create_test_service().await;

    let mut last = 0;
    for i in 0..10 {
        let submitted = service.submit(&format!("feedback {i}")).await.expect("submit");
        assert!(submitted.id > last);
        last = submitted.id;
    }
}

#[tokio::test]
#[serial]
async fn test_concurrent_submissions_get_distinct_ids() {
    let (service, _temp_dir) = create_test_service().await;
    let service = Arc::new(service);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.submit(&format!("concurrent {i}")).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("join").expect("submit").id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);

    let listing = service.list(None, None).await.expect("list");
    assert_eq!(listing.count, 8);
}
