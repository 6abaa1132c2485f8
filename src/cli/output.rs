//! Report formatting and writing.
//!
//! This module is separate from the core check logic so relscan can be used
//! as a library without printing side effects. The JSON report goes to
//! stdout (or `--output`); the human summary line goes to stderr so the
//! report stream stays machine-readable.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::report::{CheckStatus, CheckSummary};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Serialize the collected summaries as a pretty JSON report.
pub fn render_report(summaries: &[CheckSummary]) -> Result<String> {
    serde_json::to_string_pretty(summaries).context("Failed to serialize report")
}

/// Write the report to a file, or to stdout when no path is given.
pub fn write_report(summaries: &[CheckSummary], output: Option<&Path>) -> Result<()> {
    let report = render_report(summaries)?;
    match output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("Failed to write report: {}", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{report}")?;
        }
    }
    Ok(())
}

/// Print a one-line pass/fail summary per check to stderr.
pub fn print_summary(summaries: &[CheckSummary]) {
    for summary in summaries {
        let failed_items = summary
            .items
            .iter()
            .filter(|item| item.status == CheckStatus::Failed)
            .count();

        if summary.passed() {
            eprintln!(
                "{} {}: {} ({} resources)",
                SUCCESS_MARK.green(),
                summary.name,
                "passed".green(),
                summary.items.len()
            );
        } else {
            eprintln!(
                "{} {}: {} ({} of {} resources)",
                FAILURE_MARK.red(),
                summary.name,
                "failed".bold().red(),
                failed_items,
                summary.items.len()
            );
        }
    }
}
