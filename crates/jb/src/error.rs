//! CLI error types.

use jb_config::ConfigError;
use jb_source::AddressError;
use jb_viewer::{SidebarError, ViewerError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Viewer(#[from] ViewerError),

    #[error("Invalid page address: {0}")]
    Address(#[from] AddressError),

    #[error("Failed to load sidebar: {0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),
}
