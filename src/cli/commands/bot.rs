//! Assistant bot command implementation

use crate::bot::{run, BotContext, CommandRegistry, ReplOptions};
use crate::cli::args::BotCli;
use anyhow::{Context, Result};
use std::io;
use tracing::debug;

/// Run an interactive session on the terminal
pub fn run_assistant_bot(cli: &BotCli) -> Result<()> {
    let registry = CommandRegistry::with_defaults();
    let mut context = BotContext::new();
    let options = ReplOptions {
        show_banner: !cli.no_banner,
    };

    debug!(keywords = ?registry.keywords(), "starting assistant bot");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &registry,
        &mut context,
        stdin.lock(),
        &mut stdout.lock(),
        &options,
    )
    .context("Terminal I/O failed")?;

    debug!(contacts = context.contacts.len(), "session finished");
    Ok(())
}
