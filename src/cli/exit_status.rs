use std::process::ExitCode;

/// Exit status of the `lingo` binary.
///
/// - `Success` (0): translations compiled, no errors found
/// - `Failure` (1): errors were found in the translations, nothing was written
/// - `Error` (2): the command itself failed (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
