use std::process::ExitCode;

/// Process exit status of a varscout command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every file was scanned.
    Success,
    /// The command finished, but some files could not be parsed or `init`
    /// found an existing config file.
    Failure,
    /// The command did not finish: invalid path, invalid config, I/O error.
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
