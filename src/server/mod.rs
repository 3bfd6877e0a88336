//! HTTP server implementation.
//!
//! This module provides:
//! - The `axum` router exposing the feedback JSON interface
//! - Response envelopes and error mapping
//! - Listener setup with graceful shutdown
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | `POST` | `/feedback` | submit feedback |
//! | `GET` | `/feedback?status=&sort=` | list feedback |
//! | `GET` | `/feedback/summary` | counts per status |
//! | `GET` | `/health` | store connectivity |
//!
//! `OPTIONS` on a known route is answered 200 by the CORS layer; other
//! methods answer 405. Every other response, including an oversized body
//! rejection, is a JSON envelope.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use feedback_service::server::{router, AppState};
//! use feedback_service::storage::SqliteStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = SqliteStorage::new("./data/feedback.db").await?;
//! let app = router(AppState::new(Arc::new(storage)));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod handlers;
mod http;
mod responses;
mod transport;
mod types;

pub use http::FeedbackServer;
pub use responses::{
    failure_response, status_for, ListResponse, MessageResponse, SubmitResponse,
    SummaryResponse, SUBMITTED_MESSAGE,
};
pub use transport::HttpTransport;
pub use types::AppState;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Maximum accepted request body size.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/feedback",
            get(handlers::list_feedback)
                .post(handlers::submit_feedback)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/feedback/summary",
            get(handlers::feedback_summary)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
