use std::path::PathBuf;

use derive_getters::Getters;

/// Configuration derived from CLI arguments
///
/// Paths may be empty here; emptiness is reported by validation so that the
/// core decides what a missing argument means.
#[derive(Debug, Clone, Getters)]
pub struct Config {
    input_file: PathBuf,
    output_file: PathBuf,
    substitutions: Vec<String>,
}

impl Config {
    pub fn new(
        input_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        substitutions: Vec<String>,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            substitutions,
        }
    }
}
