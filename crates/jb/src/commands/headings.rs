//! `jb headings` command implementation.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::Args;
use jb_renderer::HeadingEntry;
use jb_viewer::ViewState;

use crate::commands::{PageArgs, SourceArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the headings command.
#[derive(Args)]
pub(crate) struct HeadingsArgs {
    #[command(flatten)]
    page: PageArgs,

    #[command(flatten)]
    source: SourceArgs,

    /// Print headings as JSON.
    #[arg(long)]
    json: bool,
}

impl HeadingsArgs {
    /// Execute the headings command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let address = self.page.address()?;
        let view = self.source.viewer()?.viewer.load(&address);

        if view.state() == ViewState::FetchFailed {
            Output::new().error(&format!(
                "Could not load {}",
                view.url().unwrap_or_default()
            ));
        }

        let headings = view.document().headings();
        let text = if self.json {
            serde_json::to_string_pretty(headings)?
        } else {
            format_outline(headings)
        };

        writeln!(io::stdout().lock(), "{}", text.trim_end())?;
        Ok(())
    }
}

/// One heading per line, indented by level, with its anchor.
fn format_outline(headings: &[HeadingEntry]) -> String {
    let mut out = String::new();
    for heading in headings {
        let indent = "  ".repeat(usize::from(heading.level.saturating_sub(2)));
        let _ = writeln!(out, "{indent}{} (#{})", heading.text, heading.id);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_outline() {
        let headings = jb_renderer::extract_headings("## Setup\n### Linux\n## Usage");
        assert_eq!(
            format_outline(&headings),
            "Setup (#setup)\n  Linux (#linux)\nUsage (#usage)\n"
        );
    }
}
