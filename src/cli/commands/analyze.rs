//! Log analyzer command implementation

use crate::cli::args::{AnalyzerCli, OutputFormat};
use crate::error::{ErrorExt, Result};
use crate::logs::report::{
    render_counts_table, render_diagnostic, render_filtered, render_json, render_unknown_level,
    JsonReport,
};
use crate::logs::{count_by_level, filter_by_level, load_logs_with, LogLevel};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Inputs of one analysis run
#[derive(Debug, Clone)]
pub struct AnalyzeParams {
    pub logfile: PathBuf,
    pub level: Option<String>,
    pub format: OutputFormat,
}

impl From<&AnalyzerCli> for AnalyzeParams {
    fn from(cli: &AnalyzerCli) -> Self {
        Self {
            logfile: cli.logfile.clone(),
            level: cli.level.clone(),
            format: cli.format,
        }
    }
}

/// Run the analysis against the process's stdout and stderr
pub fn run_log_analyzer(cli: &AnalyzerCli) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    analyze(
        &AnalyzeParams::from(cli),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Load the log file, print per-level counts and, when a recognized level
/// was requested, the matching entries
///
/// Results go to `out`; warnings and dropped-line diagnostics go to `diag`.
/// An unrecognized level only produces a warning.
pub fn analyze<W, E>(params: &AnalyzeParams, out: &mut W, diag: &mut E) -> Result<()>
where
    W: Write,
    E: Write,
{
    let level = match params.level.as_deref().map(str::parse::<LogLevel>) {
        Some(Ok(level)) => Some(level),
        Some(Err(unknown)) => {
            debug!(level = %unknown.0, "ignoring unrecognized level filter");
            write!(diag, "{}", render_unknown_level(&unknown.0)).to_pocket("write warning")?;
            None
        }
        None => None,
    };

    let mut rejected = Vec::new();
    let loaded = load_logs_with(&params.logfile, |err| rejected.push(err.clone()));
    for err in &rejected {
        write!(diag, "{}", render_diagnostic(err)).to_pocket("write diagnostic")?;
    }
    let entries = loaded?;
    debug!(
        valid = entries.len(),
        dropped = rejected.len(),
        "analysis input ready"
    );

    let counts = count_by_level(&entries);
    let filtered = level.map(|level| filter_by_level(&entries, level));

    match params.format {
        OutputFormat::Table => {
            write!(out, "{}", render_counts_table(&counts)).to_pocket("write report")?;
            if let (Some(level), Some(filtered)) = (level, &filtered) {
                write!(out, "{}", render_filtered(level, filtered)).to_pocket("write report")?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                counts: &counts,
                level,
                entries: filtered,
            };
            writeln!(out, "{}", render_json(&report)?).to_pocket("write report")?;
        }
    }

    out.flush().to_pocket("flush report")
}
