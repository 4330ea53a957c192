use clap::Parser;
use pocketkit::cli::{configure_colors, init_tracing, run_log_analyzer, AnalyzerCli};
use pocketkit::logs::report::render_fatal;
use std::process::ExitCode;
use tracing::{debug, trace};

fn main() -> ExitCode {
    let cli = match AnalyzerCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);
    configure_colors(cli.no_color);

    debug!("log-analyzer started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    match run_log_analyzer(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(code = err.code(), "fatal error");
            eprint!("{}", render_fatal(&err));
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
