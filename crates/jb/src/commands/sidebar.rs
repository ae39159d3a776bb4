//! `jb sidebar` command implementation.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::Args;
use jb_viewer::Sidebar;

use crate::commands::SourceArgs;
use crate::error::CliError;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print the sidebar as JSON.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// Unlike page rendering, a sidebar that cannot be loaded is an error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let viewer = self.source.viewer()?;
        let sidebar = Sidebar::fetch(viewer.source.as_ref(), viewer.viewer.sidebar_url())?;

        let text = if self.json {
            serde_json::to_string_pretty(&sidebar)?
        } else {
            let mut tree = String::new();
            format_tree(&sidebar, 0, &mut tree);
            tree
        };

        writeln!(io::stdout().lock(), "{}", text.trim_end())?;
        Ok(())
    }
}

fn format_tree(sidebar: &Sidebar, depth: usize, out: &mut String) {
    for entry in sidebar.entries() {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}{}  {}", entry.title, entry.href());
        if let Some(description) = &entry.description {
            let _ = write!(out, "  - {description}");
        }
        out.push('\n');
        format_tree(&entry.subsections, depth + 1, out);
    }
}
