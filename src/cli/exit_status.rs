use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and everything requested was found
/// - `Failure` (1): Command completed but a requested type was missing or a
///   file could not be parsed
/// - `Error` (2): Command failed due to internal error (IO error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and everything requested was found.
    Success,
    /// Command completed with missing types or unparsable files.
    Failure,
    /// Command failed due to internal error.
    Error,
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
