//! CLI argument structures
//!
//! This module defines the command-line interfaces of the two binaries.
//! Both share the verbosity and color switches.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive contact book
#[derive(Parser, Debug)]
#[command(name = "assistant-bot")]
#[command(about = "Assistant Bot - manage an in-memory contact book from the terminal", long_about = None)]
#[command(version)]
pub struct BotCli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Skip the banner and help text at startup
    #[arg(long)]
    pub no_banner: bool,
}

/// Output format of the log analyzer
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Counts table followed by the optional detail listing
    #[default]
    Table,
    /// A single JSON document
    Json,
}

/// Count log entries per level and show the entries of one level
#[derive(Parser, Debug)]
#[command(name = "log-analyzer")]
#[command(about = "Log Analyzer - count log entries per level and list entries of one level", long_about = None)]
#[command(version)]
pub struct AnalyzerCli {
    /// Log file with lines formatted as `YYYY-MM-DD HH:MM:SS LEVEL Message`
    pub logfile: PathBuf,

    /// Show the entries of this level (INFO, ERROR, DEBUG, WARNING; case-insensitive)
    pub level: Option<String>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
