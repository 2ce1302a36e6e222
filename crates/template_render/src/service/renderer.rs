use std::fs;
use std::io::Write;

use deploy_common::fs::write_atomically;
use deploy_common::status::progress;

use crate::{
    config::Config,
    domain::Template,
    errors::{RenderError, RenderResult},
    service::validation::Validate,
};

/// Summary of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub bytes_written: usize,
    pub replacements: usize,
    /// Placeholder indices left in the output because no value was given
    pub unresolved: Vec<usize>,
}

/// Render the configured template into the configured output file
///
/// Progress lines are written to `status`. Failures to write them are
/// ignored, since they carry no result.
///
/// # Errors
///
/// * [`RenderError::MissingArgument`] - An input or output path is empty
/// * [`RenderError::FileNotFound`] - The input path is not a regular file
/// * [`RenderError::ReadFailed`] - The template cannot be read as UTF-8 text
/// * [`RenderError::WriteFailed`] - The output file cannot be replaced
pub fn render<W: Write>(config: &Config, status: &mut W) -> RenderResult<RenderReport> {
    config.validate()?;
    tracing::debug!(
        "Rendering {} into {} with {} values",
        config.input_file().display(),
        config.output_file().display(),
        config.substitutions().len()
    );

    let input = config.input_file();
    let output = config.output_file();

    progress(status, format_args!("Reading {}...", input.display()));
    let source = fs::read_to_string(input).map_err(|e| RenderError::ReadFailed {
        path: input.display().to_string(),
        message: e.to_string(),
    })?;

    progress(status, format_args!("Parsing variables..."));
    let rendered = Template::new(source).render(config.substitutions());
    tracing::info!("Replaced {} placeholders", rendered.replacements);
    if !rendered.unresolved.is_empty() {
        tracing::warn!(
            "No value for placeholder indices {:?}; left as-is",
            rendered.unresolved
        );
    }

    progress(status, format_args!("Writing {}...", output.display()));
    write_atomically(output, rendered.text.as_bytes()).map_err(|e| {
        RenderError::WriteFailed {
            path: output.display().to_string(),
            message: e.to_string(),
        }
    })?;
    tracing::info!("Wrote {}", output.display());

    Ok(RenderReport {
        bytes_written: rendered.text.len(),
        replacements: rendered.replacements,
        unresolved: rendered.unresolved.into_iter().collect(),
    })
}
