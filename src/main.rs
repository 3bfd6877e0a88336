//! Feedback service binary entry point.
//!
//! Serves the feedback JSON API over HTTP. Logs go to stderr.
//!
//! Coverage is excluded because the main function binds a real socket
//! and waits for a process signal.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use feedback_service::config::{Config, LogFormat, DEFAULT_LOG_LEVEL};
use feedback_service::server::FeedbackServer;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.with_ansi(false).init(),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // Log with whatever settings we have so configuration errors are visible
    let (level, format) = config.as_ref().map_or((DEFAULT_LOG_LEVEL, LogFormat::Text), |c| {
        (c.log_level.as_str(), c.log_format)
    });
    init_logging(level, format);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, address={}, store_timeout={}ms",
        config.database_path,
        config.bind_address,
        config.store_timeout_ms
    );

    let server = FeedbackServer::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("feedback-service shutdown complete");
}
