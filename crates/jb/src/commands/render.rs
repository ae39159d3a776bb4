//! `jb render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{PageArgs, SourceArgs, open_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    page: PageArgs,

    #[command(flatten)]
    source: SourceArgs,

    /// Print only the rendered document, without the page around it.
    #[arg(long)]
    fragment: bool,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// A page whose document cannot be fetched still renders, showing the
    /// placeholder.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let address = self.page.address()?;
        let viewer = self.source.viewer()?.viewer;

        let html = if self.fragment {
            viewer.render_document(&address).html().to_owned()
        } else {
            viewer.render_standalone_page(&address)
        };

        let mut out = open_output(self.output.as_deref())?;
        out.write_all(html.as_bytes())?;
        out.flush()?;

        if let Some(path) = &self.output {
            Output::new().success(&format!("Wrote {} to {}", address.route(), path.display()));
        }

        Ok(())
    }
}
