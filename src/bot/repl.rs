//! Read-dispatch-report loop of the assistant bot

use super::display::{banner, prompt, render_error, render_help, render_reply};
use super::{parse_input, BotContext, CommandRegistry, Reply};
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// Presentation switches for a session
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// Print the banner and help text before the first prompt
    pub show_banner: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

/// Run the interactive loop until an exit command or end of input
///
/// Command failures are reported and the loop continues; only I/O errors on
/// `input` or `output` end the session early.
pub fn run<R, W>(
    registry: &CommandRegistry,
    context: &mut BotContext,
    mut input: R,
    output: &mut W,
    options: &ReplOptions,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if options.show_banner {
        writeln!(output, "{}", banner())?;
        writeln!(output, "{}", render_help(&registry.help_entries()))?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, closing session");
            writeln!(output)?;
            writeln!(output, "{}", render_reply(&Reply::Farewell))?;
            return Ok(());
        }

        let parsed = parse_input(&line);
        if parsed.is_blank() {
            continue;
        }
        trace!(command = %parsed.command, args = ?parsed.args, "read command");

        match registry.dispatch(context, &parsed.command, &parsed.args) {
            Ok(Reply::Help) => writeln!(output, "{}", render_help(&registry.help_entries()))?,
            Ok(reply) => {
                writeln!(output, "{}", render_reply(&reply))?;
                if reply.ends_session() {
                    return Ok(());
                }
            }
            Err(err) => {
                debug!(error = %err, "command failed");
                writeln!(output, "{}", render_error(&err))?;
                if err.shows_help() {
                    writeln!(output, "{}", render_help(&registry.help_entries()))?;
                }
            }
        }
    }
}
