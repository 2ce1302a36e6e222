use std::fs;
use std::io::Write;
use std::path::PathBuf;

use deploy_common::fs::write_atomically;
use deploy_common::status::progress;

use crate::{
    config::Config,
    domain::{allowed_hosts, fill_allowed_hosts},
    errors::{HostsError, HostsResult},
    service::validation::resolve_settings_file,
};

/// What a rewrite did to the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The empty assignment was filled in
    Updated { path: PathBuf, hosts: Vec<String> },
    /// No empty assignment was found; the file was not written
    Unchanged { path: PathBuf },
}

/// Fill the empty `ALLOWED_HOSTS` assignment of the configured settings file
///
/// # Errors
///
/// * [`HostsError::MissingArgument`] - No project name or settings file given
/// * [`HostsError::FileNotFound`] - The settings file does not exist
/// * [`HostsError::ReadFailed`] - The settings file cannot be read as UTF-8 text
/// * [`HostsError::WriteFailed`] - The settings file cannot be replaced
pub fn rewrite<W: Write>(config: &Config, status: &mut W) -> HostsResult<Outcome> {
    let path = resolve_settings_file(config)?;
    tracing::debug!(
        "Project {:?}, settings {}, {} extra hosts",
        config.project_name(),
        path.display(),
        config.hosts().len()
    );

    progress(status, format_args!("Reading {}...", path.display()));
    let settings = fs::read_to_string(&path).map_err(|e| HostsError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let hosts = allowed_hosts(config.hosts());
    let Some(filled) = fill_allowed_hosts(&settings, &hosts) else {
        tracing::warn!("No empty ALLOWED_HOSTS assignment in {}", path.display());
        progress(
            status,
            format_args!("No empty ALLOWED_HOSTS in {}, nothing to do.", path.display()),
        );
        return Ok(Outcome::Unchanged { path });
    };
    tracing::info!(
        "Filling {} ALLOWED_HOSTS assignment(s) with {} hosts",
        filled.occurrences,
        hosts.len()
    );

    progress(status, format_args!("Writing {}...", path.display()));
    write_atomically(&path, filled.text.as_bytes()).map_err(|e| HostsError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::info!("Wrote {}", path.display());

    Ok(Outcome::Updated { path, hosts })
}
