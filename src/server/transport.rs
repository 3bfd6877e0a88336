//! Transport layer for the HTTP server.
//!
//! Binds a TCP listener and serves a router until a shutdown signal fires.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Bound HTTP listener.
#[derive(Debug)]
pub struct HttpTransport {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl HttpTransport {
    /// Bind to `addr`. Port 0 picks a free port; see [`Self::local_addr`].
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::BindFailed`] if the address cannot be bound.
    pub async fn bind(addr: SocketAddr) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindFailed {
                address: addr.to_string(),
                message: e.to_string(),
            })?;
        let local_addr = listener.local_addr().map_err(|e| ServerError::BindFailed {
            address: addr.to_string(),
            message: format!("Failed to get local addr: {e}"),
        })?;

        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Address actually bound.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve `app` until `shutdown` completes.
    ///
    /// In-flight requests finish before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Serve`] if the server stops with an I/O error.
    pub async fn serve<F>(self, app: Router, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(address = %self.local_addr, "feedback service listening");

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Serve {
                message: e.to_string(),
            })
    }
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
