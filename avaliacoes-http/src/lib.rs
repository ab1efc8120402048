//! Avaliações HTTP API Server
//!
//! This crate exposes the student evaluation service over HTTP.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. A second call is a no-op, so
/// tests and embedders that already installed a subscriber keep theirs.
pub fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the HTTP server with the default configuration
pub async fn start() -> anyhow::Result<()> {
    start_with_config(ServerConfig::default()).await
}

/// Start the HTTP server with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_level);
    start_server(config).await
}
