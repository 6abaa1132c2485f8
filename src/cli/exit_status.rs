use std::process::ExitCode;

use crate::report::CheckSummary;

/// Process-level outcome of a relscan command.
///
/// Variant order defines the exit code: `status as u8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed and every check passed (0).
    Success,
    /// Scan completed but at least one check reported a failed summary (1).
    Failure,
    /// The command never produced a report: config parse failure, credential
    /// resolution failure, client construction failure (2).
    Error,
}

impl ExitStatus {
    /// Map a finished scan onto the pass/fail convention.
    ///
    /// A scan with no configured checks counts as success; a degraded
    /// summary (failed query, empty item list) counts as failure like any
    /// other failed check.
    pub fn from_summaries(summaries: &[CheckSummary]) -> Self {
        if summaries.iter().all(CheckSummary::passed) {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
