use std::path::Path;

use crate::{
    config::Config,
    errors::{RenderError, RenderResult},
};

pub trait Validate {
    fn validate(&self) -> RenderResult<()>;
}

impl Validate for Config {
    /// Check arguments before any file is touched
    ///
    /// Both paths are checked for presence first, then the template is
    /// checked for existence.
    fn validate(&self) -> RenderResult<()> {
        require_path("input_file", self.input_file())?;
        require_path("output_file", self.output_file())?;

        if !self.input_file().is_file() {
            return Err(RenderError::FileNotFound {
                path: self.input_file().display().to_string(),
            });
        }

        Ok(())
    }
}

fn require_path(argument: &str, path: &Path) -> RenderResult<()> {
    if path.as_os_str().is_empty() {
        return Err(RenderError::MissingArgument {
            argument: argument.to_string(),
        });
    }
    Ok(())
}
