use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{SupportError, SupportResult};

/// Initialize logging based on environment configuration
///
/// Events are written to stderr so that stdout stays reserved for the
/// progress messages of the binaries.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(true)` if a subscriber was installed
/// - `Ok(false)` if `RUST_LOG` is not set and logging was skipped
/// - `Err(SupportError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> SupportResult<bool> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(false);
    }

    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| SupportError::LoggingInitialization(e.to_string()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_logging_setup() {
        // Without RUST_LOG this is a no-op, with it a subscriber is installed
        let result = init_logging();
        assert!(result.is_ok());
    }
}
