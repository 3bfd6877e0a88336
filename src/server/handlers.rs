//! Route handlers.
//!
//! Handlers decode the request, call [`FeedbackService`](crate::service::FeedbackService)
//! and wrap the outcome in a response envelope. They hold no business logic.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::FeedbackError;
use crate::service::ListQuery;

use super::responses::{
    failure_response, ListResponse, MessageResponse, SubmitResponse, SummaryResponse,
};
use super::types::AppState;

/// `POST /feedback`
///
/// Body rejections (over the size limit, unreadable) keep their status but
/// still answer with a JSON envelope.
pub async fn submit_feedback(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>, Response> {
    let body = body.map_err(|rejection| {
        tracing::debug!(status = %rejection.status(), "request body rejected");
        failure_response(rejection.status(), rejection.body_text())
    })?;

    let submitted = state
        .service
        .submit_json(&body)
        .await
        .map_err(IntoResponse::into_response)?;
    Ok(Json(submitted.into()))
}

/// `GET /feedback?status=&sort=`
///
/// Undecodable query strings list with the defaults, like unknown values do.
pub async fn list_feedback(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListResponse>, FeedbackError> {
    let query = match pairs {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "query string ignored");
            ListQuery::default()
        }
    };
    let listing = state.service.list_query(&query).await?;
    Ok(Json(listing.into()))
}

/// `GET /feedback/summary`
pub async fn feedback_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, FeedbackError> {
    let counts = state.service.summary().await?;
    Ok(Json(counts.into()))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<MessageResponse>) {
    match state.service.health().await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::ok("ok"))),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(MessageResponse::failure(format!(
                "Database connection error: {e}"
            ))),
        ),
    }
}

/// Any other method on a known route.
pub async fn method_not_allowed(method: Method) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse::failure(format!(
            "Method {method} not supported."
        ))),
    )
}

/// Unknown route.
pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::failure("Not found.")),
    )
}
