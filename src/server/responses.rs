//! Response envelopes.
//!
//! Every response body carries a `success` flag plus either a payload or a
//! human-readable `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;
use crate::service::{Listing, Submitted};
use crate::storage::{FeedbackRecord, StatusCounts};

/// Message sent with a successful submission.
pub const SUBMITTED_MESSAGE: &str = "Feedback submitted successfully.";

/// Response to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation text.
    pub message: String,
    /// Identifier of the new record.
    pub id: i64,
}

impl From<Submitted> for SubmitResponse {
    fn from(submitted: Submitted) -> Self {
        Self {
            success: true,
            message: SUBMITTED_MESSAGE.to_string(),
            id: submitted.id,
        }
    }
}

/// Response to a listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Always `true`.
    pub success: bool,
    /// Matching records.
    pub data: Vec<FeedbackRecord>,
    /// Number of records in `data`.
    pub count: usize,
}

impl From<Listing> for ListResponse {
    fn from(listing: Listing) -> Self {
        Self {
            success: true,
            data: listing.records,
            count: listing.count,
        }
    }
}

/// Response to a summary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Always `true`.
    pub success: bool,
    /// Counts per status.
    pub data: StatusCounts,
}

impl From<StatusCounts> for SummaryResponse {
    fn from(data: StatusCounts) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope with only an outcome and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome.
    pub success: bool,
    /// Human-readable detail.
    pub message: String,
}

impl MessageResponse {
    /// Successful outcome.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed outcome.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Failure envelope with an explicit status.
#[must_use]
pub fn failure_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(MessageResponse::failure(message))).into_response()
}

/// HTTP status for a service error.
#[must_use]
pub const fn status_for(err: &FeedbackError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        failure_response(status, self.to_string())
    }
}
