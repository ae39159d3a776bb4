//! `jb serve` command implementation.

use clap::Args;
use jb_server::{run_server, server_config_from_jb_config};

use crate::commands::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and fetch logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.source.load_config(self.host, self.port)?;

        if let Some(path) = &config.config_path {
            output.field("Config", path.display());
        }
        output.field(
            "Serving docs on",
            format!("http://{}:{}/docs", config.server.host, config.server.port),
        );
        output.field("Document source", &config.source.base_url);
        output.field("Sidebar", &config.source.sidebar_url);

        let server_config = server_config_from_jb_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
