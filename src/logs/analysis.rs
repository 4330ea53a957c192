//! Aggregation over parsed log entries

use super::{LogEntry, LogLevel};
use std::collections::BTreeMap;

/// Occurrences per level; iteration is ordered by level name
pub type LevelCounts = BTreeMap<LogLevel, usize>;

/// Count entries per level
///
/// Levels that never occur are absent from the result.
pub fn count_by_level(entries: &[LogEntry]) -> LevelCounts {
    entries.iter().fold(LevelCounts::new(), |mut counts, entry| {
        *counts.entry(entry.level).or_insert(0) += 1;
        counts
    })
}

/// Entries of one level, in their original order
pub fn filter_by_level(entries: &[LogEntry], level: LogLevel) -> Vec<&LogEntry> {
    entries.iter().filter(|e| e.level == level).collect()
}
