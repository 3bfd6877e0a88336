//! Main HTTP server orchestration.
//!
//! This module provides the main entry point for running the feedback service.

use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::storage::SqliteStorage;

use super::transport::{shutdown_signal, HttpTransport};
use super::types::AppState;

/// Main HTTP server that orchestrates all components.
///
/// Opens the store, wires it into the service, and serves the router.
#[derive(Debug)]
pub struct FeedbackServer {
    /// Server configuration.
    config: Config,
}

impl FeedbackServer {
    /// Creates a new server with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Storage initialization fails
    /// - The listen address cannot be bound
    /// - The server stops with an I/O error
    pub async fn run(&self) -> Result<(), AppError> {
        self.run_until(shutdown_signal()).await
    }

    /// Runs the server until `shutdown` completes.
    ///
    /// # Errors
    ///
    /// See [`FeedbackServer::run`].
    pub async fn run_until<F>(&self, shutdown: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let storage =
            SqliteStorage::open(&self.config.database_path, self.config.storage_options())
                .await?;
        tracing::info!(database = %self.config.database_path, "feedback store ready");

        let state = AppState::new(Arc::new(storage));
        let app = super::router(state);

        let transport = HttpTransport::bind(self.config.bind_address).await?;
        transport.serve(app, shutdown).await?;

        tracing::info!("feedback service stopped");
        Ok(())
    }
}
