use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter
/// tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, every key is referenced.
    Success,
    /// Command completed but found unreferenced keys.
    Failure,
    /// Command failed due to an internal or configuration error.
    Error,
}

impl ExitStatus {
    /// Map a diagnostic count to the pipeline-facing status.
    pub fn from_issue_count(count: usize) -> Self {
        if count == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
