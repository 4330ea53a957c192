//! Parsing of single log lines
//!
//! Accepted format: `YYYY-MM-DD HH:MM:SS LEVEL free-text message`, fields
//! separated by single spaces. Validation runs stage by stage and the first
//! failing stage is reported together with the raw line.

use super::LogLevel;
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Human-readable form of the accepted line layout
pub const EXPECTED_FORMAT: &str = "YYYY-MM-DD HH:MM:SS LEVEL Message";

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Valid regex pattern"));
static TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").expect("Valid regex pattern"));

/// One successfully parsed log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M:%S"),
            self.message
        )
    }
}

/// Validation stage at which a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// Fewer than four space-separated fields
    Format,
    Date,
    Time,
    Level,
}

impl ParseStage {
    pub fn message(&self) -> &'static str {
        match self {
            ParseStage::Format => "Invalid log string format",
            ParseStage::Date => "Date format error",
            ParseStage::Time => "Time format error",
            ParseStage::Level => "Invalid log level",
        }
    }
}

/// A rejected line with the reason for rejection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .stage.message())]
pub struct ParseError {
    pub stage: ParseStage,
    pub line: String,
    pub details: Option<String>,
}

impl ParseError {
    fn new(stage: ParseStage, line: &str) -> Self {
        Self {
            stage,
            line: line.to_string(),
            details: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Parse one line into a [`LogEntry`]
///
/// Surrounding whitespace is ignored and the level is normalized to
/// uppercase. The message is everything after the level, trimmed.
pub fn parse_log_line(line: &str) -> Result<LogEntry, ParseError> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.splitn(4, ' ').collect();
    let [date, time, level, message] = parts.as_slice() else {
        return Err(ParseError::new(ParseStage::Format, trimmed));
    };

    let date = parse_date(date).map_err(|details| {
        ParseError::new(ParseStage::Date, trimmed).with_details(details)
    })?;
    let time = parse_time(time).map_err(|details| {
        ParseError::new(ParseStage::Time, trimmed).with_details(details)
    })?;
    let level = level.parse::<LogLevel>().map_err(|err| {
        ParseError::new(ParseStage::Level, trimmed).with_details(err.to_string())
    })?;

    Ok(LogEntry {
        date,
        time,
        level,
        message: message.trim().to_string(),
    })
}

fn parse_date(field: &str) -> Result<NaiveDate, String> {
    if !DATE_SHAPE.is_match(field) {
        return Err(format!("'{}' does not match YYYY-MM-DD", field));
    }
    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .map_err(|e| format!("'{}' is not a valid date: {}", field, e))
}

fn parse_time(field: &str) -> Result<NaiveTime, String> {
    if !TIME_SHAPE.is_match(field) {
        return Err(format!("'{}' does not match HH:MM:SS", field));
    }
    NaiveTime::parse_from_str(field, "%H:%M:%S")
        .map_err(|e| format!("'{}' is not a valid time: {}", field, e))
}
