//! Loading log files into parsed entries

use super::{parse_log_line, LogEntry, ParseError};
use crate::error::{common, ErrorExt, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parse every line of `reader`, reporting rejected lines to `on_rejected`
///
/// Blank lines are rejected like any other malformed line. Entries keep
/// their order in the input.
pub fn parse_lines<R, F>(reader: R, mut on_rejected: F) -> io::Result<Vec<LogEntry>>
where
    R: BufRead,
    F: FnMut(&ParseError),
{
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_log_line(&line) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                debug!(line_number = index + 1, stage = ?err.stage, "dropping malformed log line");
                on_rejected(&err);
            }
        }
    }
    Ok(entries)
}

/// Load a log file, reporting each rejected line to `on_rejected`
///
/// Fails when the file cannot be opened or read, or when no line in it is a
/// valid entry. The file handle is released before returning.
pub fn load_logs_with<F>(path: impl AsRef<Path>, on_rejected: F) -> Result<Vec<LogEntry>>
where
    F: FnMut(&ParseError),
{
    let path = path.as_ref();
    debug!(path = %path.display(), "loading log file");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(common::file_not_found(path).with_source(e));
        }
        Err(e) => return Err(e).to_input_error(path),
    };

    let entries = parse_lines(BufReader::new(file), on_rejected).to_input_error(path)?;
    if entries.is_empty() {
        return Err(common::no_valid_entries(path));
    }

    debug!(count = entries.len(), "log file loaded");
    Ok(entries)
}

/// Load a log file, discarding rejected lines after logging them
pub fn load_logs(path: impl AsRef<Path>) -> Result<Vec<LogEntry>> {
    load_logs_with(path, |_| {})
}
