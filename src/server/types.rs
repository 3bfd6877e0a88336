//! Server types and shared state.

use std::sync::Arc;

use crate::service::FeedbackService;
use crate::traits::FeedbackStore;

/// Shared application state for all route handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Feedback service.
    pub service: Arc<FeedbackService>,
}

impl AppState {
    /// Creates application state over a store.
    #[must_use]
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self {
            service: Arc::new(FeedbackService::new(store)),
        }
    }
}

impl From<FeedbackService> for AppState {
    fn from(service: FeedbackService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
