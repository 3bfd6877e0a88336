//! Integration tests for the feedback service.
//!
//! These tests verify end-to-end workflows including:
//! - Submission from raw JSON bodies
//! - Listing with status filters and sort orders
//! - Error recovery paths

mod list_workflow;
mod submit_workflow;
