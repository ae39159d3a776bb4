//! HTTP server for the JugadBase docs viewer.
//!
//! Serves rendered documentation pages over axum:
//! - `/docs/...` full HTML pages with sidebar and table of contents
//! - `/api/docs/...` rendered documents as JSON
//! - `/api/sidebar` the parsed sidebar
//! - `/theme.css` the site stylesheet
//!
//! Documents are fetched from the remote source on every request.
//!
//! # Quick Start
//!
//! ```ignore
//! use jb_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use jb_source::{DEFAULT_TIMEOUT_SECS, DocumentSource, HttpSource};
use jb_viewer::{DocsViewer, Theme, ViewerConfig};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Viewer configuration.
    pub viewer: ViewerConfig,
    /// Timeout for remote fetches, in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            viewer: ViewerConfig::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the viewer cannot be built or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source: Arc<dyn DocumentSource> =
        Arc::new(HttpSource::new(Duration::from_secs(config.timeout_secs)));
    let viewer = DocsViewer::new(config.viewer, source)?;

    tracing::info!(
        base_url = viewer.resolver().base_url(),
        sidebar_url = viewer.sidebar_url(),
        "Document source configured"
    );

    let state = Arc::new(AppState { viewer });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, stopping server..."),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C, stopping server"),
    }
}

/// Create viewer configuration from JugadBase config.
#[must_use]
pub fn viewer_config_from_jb_config(config: &jb_config::Config) -> ViewerConfig {
    let theme = &config.theme;

    ViewerConfig {
        base_url: config.source.base_url.clone(),
        root_document: config.source.root_document.clone(),
        sidebar_url: config.source.sidebar_url.clone(),
        code_theme: theme.code_theme.clone(),
        theme: Theme {
            background: theme.background.clone(),
            foreground: theme.foreground.clone(),
            primary: theme.primary.clone(),
            secondary: theme.secondary.clone(),
            tertiary: theme.tertiary.clone(),
            light_background: theme.light_background.clone(),
            dark_background: theme.dark_background.clone(),
            heading_font: theme.heading_font.clone(),
            body_font: theme.body_font.clone(),
        },
    }
}

/// Create server configuration from JugadBase config.
#[must_use]
pub fn server_config_from_jb_config(config: &jb_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        viewer: viewer_config_from_jb_config(config),
        timeout_secs: config.source.timeout_secs,
    }
}
