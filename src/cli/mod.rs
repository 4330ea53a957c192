//! CLI entry points
//!
//! This module contains everything the binaries share:
//! - Argument parsing structures
//! - Command implementations
//! - Tracing and color setup

pub mod args;
pub mod commands;
pub mod logging;

pub use args::{AnalyzerCli, BotCli, OutputFormat};
pub use commands::{run_assistant_bot, run_log_analyzer};
pub use logging::{get_log_level, init_tracing};

/// Force colors off when requested; otherwise `colored` decides from the
/// terminal and the `NO_COLOR`/`CLICOLOR` environment
pub fn configure_colors(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
}
