/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Exit status for invocations missing a required argument
const EXIT_USAGE: u8 = 2;
/// Exit status for every other failure
const EXIT_FAILURE: u8 = 1;

/// Render errors
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Must provide input and output files (missing --{argument})")]
    MissingArgument { argument: String },
    #[error("No file located at {path}")]
    FileNotFound { path: String },
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl RenderError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            RenderError::MissingArgument { .. } => EXIT_USAGE,
            RenderError::FileNotFound { .. }
            | RenderError::ReadFailed { .. }
            | RenderError::WriteFailed { .. } => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderError;

    #[test]
    fn test_error_messages_and_exit_codes() {
        let missing = RenderError::MissingArgument {
            argument: "input_file".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "Must provide input and output files (missing --input_file)"
        );
        assert_eq!(missing.exit_code(), 2);

        let not_found = RenderError::FileNotFound {
            path: "templates/app.conf".to_string(),
        };
        assert_eq!(not_found.to_string(), "No file located at templates/app.conf");
        assert_eq!(not_found.exit_code(), 1);

        let write = RenderError::WriteFailed {
            path: "out".to_string(),
            message: "Permission denied".to_string(),
        };
        assert_eq!(write.exit_code(), 1);
    }
}
