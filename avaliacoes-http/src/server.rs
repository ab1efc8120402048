use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use avaliacoes_core::{EvaluationService, Locale};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Language used when `Accept-Language` names nothing we support
    #[serde(default)]
    pub default_locale: Locale,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Prefix for absolute `Location` headers, e.g. `https://api.example.com`.
    /// When unset, `Location` carries the path only.
    #[serde(default)]
    pub public_url: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_locale: Locale::default(),
            log_level: default_log_level(),
            public_url: None,
        }
    }
}

impl ServerConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: EvaluationService,
    pub default_locale: Locale,
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(service: EvaluationService, default_locale: Locale) -> Self {
        Self {
            service,
            default_locale,
            public_url: None,
        }
    }

    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = Some(public_url.into());
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EvaluationService::in_memory(), Locale::default())
    }
}

/// Router with state and the tracing/CORS layers applied
pub fn build_app(state: AppState) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let mut state = AppState::new(EvaluationService::in_memory(), config.default_locale);
    state.public_url = config.public_url.clone();
    info!(
        "Initialized in-memory store, default locale {}",
        config.default_locale
    );

    let app = build_app(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"port": 8081, "default_locale": "pt-BR", "public_url": "http://localhost"}}"#
        )
        .unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.public_url.as_deref(), Some("http://localhost"));
        assert_eq!(config.default_locale, Locale::PtBr);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = ServerConfig::from_file("/nonexistent/avaliacoes.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
