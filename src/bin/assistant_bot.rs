use clap::Parser;
use pocketkit::cli::{configure_colors, init_tracing, run_assistant_bot, BotCli};
use std::process::ExitCode;
use tracing::{debug, trace};

fn main() -> ExitCode {
    let cli = match BotCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);
    configure_colors(cli.no_color);

    debug!("assistant-bot started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    match run_assistant_bot(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
