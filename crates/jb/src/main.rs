//! JugadBase docs CLI.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `render`: Render a docs page to HTML
//! - `headings`: Print the outline of a docs page
//! - `url`: Print the document URL of a docs page
//! - `sidebar`: Print the documentation table of contents

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{HeadingsArgs, RenderArgs, ServeArgs, SidebarArgs, UrlArgs};
use error::CliError;
use output::Output;

/// JugadBase docs viewer.
#[derive(Parser)]
#[command(name = "jb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Render a docs page to HTML.
    Render(RenderArgs),
    /// Print the outline of a docs page.
    Headings(HeadingsArgs),
    /// Print the document URL of a docs page.
    Url(UrlArgs),
    /// Print the documentation table of contents.
    Sidebar(SidebarArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute())),
        Commands::Render(args) => args.execute(),
        Commands::Headings(args) => args.execute(),
        Commands::Url(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from(["jb", "render", "sql", "select", "--fragment"]).unwrap();
        assert!(matches!(cli.command, Commands::Render(_)));
    }

    #[test]
    fn test_too_many_segments_rejected() {
        assert!(Cli::try_parse_from(["jb", "url", "a", "b", "c", "d"]).is_err());
    }
}
