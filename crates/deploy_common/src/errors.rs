/// Result type for support operations
pub type SupportResult<T> = Result<T, SupportError>;

/// Errors raised by the shared support layer
#[derive(thiserror::Error, Debug)]
pub enum SupportError {
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}
