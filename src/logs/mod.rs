//! Structured log file analysis
//!
//! Lines are parsed into [`LogEntry`] values, malformed lines are dropped
//! with a diagnostic, and the surviving entries are counted per level or
//! filtered by level.
//!
//! # Examples
//!
//! ```
//! use pocketkit::logs::{count_by_level, filter_by_level, parse_log_line, LogLevel};
//!
//! let entries: Vec<_> = [
//!     "2024-01-01 10:00:00 INFO System started",
//!     "2024-01-01 10:05:00 error Disk failure",
//! ]
//! .iter()
//! .filter_map(|line| parse_log_line(line).ok())
//! .collect();
//!
//! let counts = count_by_level(&entries);
//! assert_eq!(counts[&LogLevel::Info], 1);
//! assert_eq!(filter_by_level(&entries, LogLevel::Error)[0].message, "Disk failure");
//! ```

pub mod analysis;
pub mod level;
pub mod loader;
pub mod parser;
pub mod report;

pub use analysis::{count_by_level, filter_by_level, LevelCounts};
pub use level::{LogLevel, UnknownLevel};
pub use loader::{load_logs, load_logs_with, parse_lines};
pub use parser::{parse_log_line, LogEntry, ParseError, ParseStage, EXPECTED_FORMAT};
