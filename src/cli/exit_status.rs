use std::process::ExitCode;

/// Process exit status of a compression run.
///
/// Fatal build errors share code 2 with clap's usage errors, so callers of
/// the build scripts only need to tell "bundles written" from "not written".
/// Warnings never change the status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Bootstrap, compressed bundle and every message file were written.
    Success,
    /// A stage failed; outputs of the stages before it are left on disk.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
