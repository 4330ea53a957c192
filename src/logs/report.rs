//! Text and JSON rendering of log analysis results

use super::parser::EXPECTED_FORMAT;
use super::{LevelCounts, LogEntry, LogLevel, ParseError};
use crate::error::PocketError;
use colored::*;
use serde::Serialize;

/// Counts table, one row per level in alphabetical order
pub fn render_counts_table(counts: &LevelCounts) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("Logging Level │ Count\n");
    out.push_str("──────────────┼──────\n");
    for (level, count) in counts {
        out.push_str(&format!("{:<13} │ {}\n", level.as_str(), count));
    }
    out
}

/// Detail listing of the entries matching `level`
pub fn render_filtered(level: LogLevel, entries: &[&LogEntry]) -> String {
    if entries.is_empty() {
        return format!("No log entries found for level '{}'.\n", level);
    }

    let mut out = format!("\nLog details for level '{}':\n", level);
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// Diagnostic for a dropped line
pub fn render_diagnostic(err: &ParseError) -> String {
    render_problem(&err.to_string(), err.details.as_deref(), Some(&err.line))
}

/// Message for a condition that ends the program
pub fn render_fatal(err: &PocketError) -> String {
    render_problem(&err.user_message(), err.details().as_deref(), None)
}

fn render_problem(message: &str, details: Option<&str>, line: Option<&str>) -> String {
    let mut out = format!("{}\n", format!("Error: {}", message).red());
    if let Some(details) = details {
        out.push_str(&format!("{}\n", format!("Details: {}", details).magenta()));
    }
    if let Some(line) = line {
        out.push_str(&format!("Line: {}\n", line));
    }
    out.push_str(&format!("Expected format: {}\n", EXPECTED_FORMAT));
    out
}

/// Warning shown when the requested level is not recognized
pub fn render_unknown_level(requested: &str) -> String {
    format!(
        "\n{}\nValid levels are: {}\n",
        format!(
            "Warning: '{}' is not a valid log level!",
            requested.to_uppercase()
        )
        .yellow(),
        LogLevel::names()
    )
}

/// Machine-readable analysis result
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub counts: &'a LevelCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<&'a LogEntry>>,
}

pub fn render_json(report: &JsonReport<'_>) -> Result<String, PocketError> {
    Ok(serde_json::to_string_pretty(report)?)
}
