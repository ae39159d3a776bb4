//! `jb url` command implementation.

use std::io::{self, Write};

use clap::Args;
use jb_source::UrlResolver;

use crate::commands::{PageArgs, SourceArgs};
use crate::error::CliError;

/// Arguments for the url command.
#[derive(Args)]
pub(crate) struct UrlArgs {
    #[command(flatten)]
    page: PageArgs,

    #[command(flatten)]
    source: SourceArgs,
}

impl UrlArgs {
    /// Execute the url command. Nothing is fetched.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let address = self.page.address()?;
        let config = self.source.load_config(None, None)?;
        let resolver = UrlResolver::new(config.source.base_url, config.source.root_document);

        writeln!(io::stdout().lock(), "{}", resolver.resolve(&address))?;
        Ok(())
    }
}
