//! Integration tests for the log-analyzer binary
//!
//! Runs the compiled binary against temporary log files

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_LOG: &str = "\
2024-01-22 08:30:01 INFO User logged in successfully.
2024-01-22 08:45:23 DEBUG Attempting to connect to the database.
2024-01-22 09:00:45 ERROR Database connection failed.
2024-01-22 09:15:10 INFO Data export completed.
2024-01-22 10:30:55 WARNING Disk usage above 80%.
2024-01-22 11:05:00 DEBUG Starting data backup process.
2024-01-22 11:30:15 ERROR Backup process failed.
";

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn analyzer() -> Command {
    let mut cmd = Command::cargo_bin("log-analyzer").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_counts_table() {
    let file = log_file(SAMPLE_LOG);
    analyzer()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Logging Level │ Count"))
        .stdout(predicate::str::contains("DEBUG         │ 2"))
        .stdout(predicate::str::contains("ERROR         │ 2"))
        .stdout(predicate::str::contains("INFO          │ 2"))
        .stdout(predicate::str::contains("WARNING       │ 1"))
        .stdout(predicate::str::contains("Log details").not());
}

#[test]
fn test_level_filter_is_case_insensitive() {
    let file = log_file(SAMPLE_LOG);
    analyzer()
        .arg(file.path())
        .arg("error")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log details for level 'ERROR':"))
        .stdout(predicate::str::contains(
            "2024-01-22 09:00:45 - Database connection failed.",
        ))
        .stdout(predicate::str::contains(
            "2024-01-22 11:30:15 - Backup process failed.",
        ))
        .stdout(predicate::str::contains("User logged in").not());
}

#[test]
fn test_level_without_entries() {
    let file = log_file("2024-01-22 08:30:01 INFO Only info here.\n");
    analyzer()
        .arg(file.path())
        .arg("debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO          │ 1"))
        .stdout(predicate::str::contains(
            "No log entries found for level 'DEBUG'.",
        ));
}

#[test]
fn test_unknown_level_warns_but_succeeds() {
    let file = log_file(SAMPLE_LOG);
    analyzer()
        .arg(file.path())
        .arg("critical")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: 'CRITICAL' is not a valid log level!",
        ))
        .stderr(predicate::str::contains(
            "Valid levels are: DEBUG, ERROR, INFO, WARNING",
        ))
        .stdout(predicate::str::contains("Logging Level │ Count"))
        .stdout(predicate::str::contains("Log details").not());
}

#[test]
fn test_malformed_lines_are_reported_and_skipped() {
    let file = log_file(
        "2024-01-22 08:30:01 INFO Fine line.\n\
         garbage\n\
         2024-13-22 08:30:01 INFO Bad month.\n\
         2024-01-22 8:30 INFO Bad time.\n\
         2024-01-22 08:30:01 FATAL Bad level.\n",
    );
    analyzer()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO          │ 1"))
        .stderr(predicate::str::contains("Error: Invalid log string format"))
        .stderr(predicate::str::contains("Error: Date format error"))
        .stderr(predicate::str::contains("Error: Time format error"))
        .stderr(predicate::str::contains("Error: Invalid log level"))
        .stderr(predicate::str::contains("Line: garbage"));
}

#[test]
fn test_missing_file_fails() {
    analyzer()
        .arg("/nonexistent/path/app.log")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_valid_entries_fails() {
    let file = log_file("not a log line\nanother one\n");
    analyzer()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No valid log entries found"));
}

#[test]
fn test_missing_argument_fails() {
    analyzer()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("log-analyzer")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("[LEVEL]"));
}

#[test]
fn test_json_output() {
    let file = log_file(SAMPLE_LOG);
    let output = analyzer()
        .arg(file.path())
        .arg("warning")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["counts"]["ERROR"], 2);
    assert_eq!(report["counts"]["WARNING"], 1);
    assert_eq!(report["level"], "WARNING");
    assert_eq!(report["entries"][0]["message"], "Disk usage above 80%.");
}

#[test]
fn test_blank_line_is_reported() {
    let file = log_file("2024-01-22 08:30:01 INFO Fine line.\n\n");
    analyzer()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO          │ 1"))
        .stderr(predicate::str::contains("Error: Invalid log string format"));
}
