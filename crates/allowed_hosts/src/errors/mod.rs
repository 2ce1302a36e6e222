/// Result type for settings rewrites
pub type HostsResult<T> = Result<T, HostsError>;

/// Exit status for invocations missing a required argument
const EXIT_USAGE: u8 = 2;
/// Exit status for every other failure
const EXIT_FAILURE: u8 = 1;

/// Allowed-hosts rewrite errors
#[derive(thiserror::Error, Debug)]
pub enum HostsError {
    #[error("Must provide a project name or a settings file (missing --{argument})")]
    MissingArgument { argument: String },
    #[error("No settings file located at {path}")]
    FileNotFound { path: String },
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl HostsError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            HostsError::MissingArgument { .. } => EXIT_USAGE,
            HostsError::FileNotFound { .. }
            | HostsError::ReadFailed { .. }
            | HostsError::WriteFailed { .. } => EXIT_FAILURE,
        }
    }
}
