//! CLI command implementations.

pub(crate) mod headings;
pub(crate) mod render;
pub(crate) mod serve;
pub(crate) mod sidebar;
pub(crate) mod url;

pub(crate) use headings::HeadingsArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use sidebar::SidebarArgs;
pub(crate) use url::UrlArgs;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use jb_config::{CliSettings, Config};
use jb_server::viewer_config_from_jb_config;
use jb_source::{DocumentSource, HttpSource, PageAddress};
use jb_viewer::DocsViewer;

use crate::error::CliError;

/// Configuration and document source options shared by all commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover jb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the raw Markdown docs (overrides config).
    #[arg(long, env = "JB_BASE_URL")]
    base_url: Option<String>,

    /// URL of the sidebar JSON (overrides config).
    #[arg(long, env = "JB_SIDEBAR_URL")]
    sidebar_url: Option<String>,
}

impl SourceArgs {
    /// Load configuration with these options applied on top.
    pub(crate) fn load_config(
        &self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            host,
            port,
            base_url: self.base_url.clone(),
            sidebar_url: self.sidebar_url.clone(),
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Configuration loaded");

        Ok(config)
    }

    /// Load configuration and build a viewer over HTTP.
    pub(crate) fn viewer(&self) -> Result<Viewer, CliError> {
        let config = self.load_config(None, None)?;
        let source: Arc<dyn DocumentSource> = Arc::new(HttpSource::new(Duration::from_secs(
            config.source.timeout_secs,
        )));
        let viewer = DocsViewer::new(viewer_config_from_jb_config(&config), Arc::clone(&source))?;

        Ok(Viewer { viewer, source })
    }
}

/// Viewer together with the source it fetches from.
pub(crate) struct Viewer {
    pub(crate) viewer: DocsViewer,
    pub(crate) source: Arc<dyn DocumentSource>,
}

/// Positional page address.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Category (omit for the docs root).
    category: Option<String>,
    subpage: Option<String>,
    subsubpage: Option<String>,
}

impl PageArgs {
    pub(crate) fn address(&self) -> Result<PageAddress, CliError> {
        Ok(PageAddress::new(
            self.category.as_deref(),
            self.subpage.as_deref(),
            self.subsubpage.as_deref(),
        )?)
    }
}

/// Open the command's output: a file if given, stdout otherwise.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
