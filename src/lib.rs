//! Feedback Service
//!
//! Collects free-text user feedback and lets an operator review it,
//! filtered by status and sorted by recency.
//!
//! # Features
//!
//! - Submission with whitespace trimming and validation
//! - Listing with a tolerant status filter and newest/oldest ordering
//! - Per-status summary counts and a health check
//! - `SQLite` persistence with bounded store timeouts
//!
//! # Quick Start
//!
//! ```bash
//! DATABASE_PATH=./data/feedback.db BIND_ADDRESS=127.0.0.1:8080 ./feedback-service
//! curl -X POST localhost:8080/feedback -d '{"feedback_text": "Great service!"}'
//! curl 'localhost:8080/feedback?status=new&sort=oldest'
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   JSON/HTTP   ┌─────────────────┐      ┌──────────────┐
//! │ Form / Admin │──────────────▶│  axum router    │─────▶│ Feedback     │
//! │  renderers   │◀──────────────│  (server)       │      │ Service      │
//! └──────────────┘               └─────────────────┘      └──────┬───────┘
//!                                                                │
//!                                                                ▼
//!                                                             SQLite
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod test_utils;
