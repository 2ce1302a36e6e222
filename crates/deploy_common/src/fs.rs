//! Output file replacement
//!
//! Rendered files are staged next to their destination and renamed into
//! place, so a failed write never leaves a truncated destination behind.
//!
//! # Core Functions
//!
//! - [`write_atomically`] - Replace or create a file with new contents

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

/// Mode given to files that did not exist before the write
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Symlink chain length after which resolution gives up, matching Linux `ELOOP`
const MAX_SYMLINK_HOPS: usize = 40;

/// Replace the file at `path` with `contents`
///
/// The contents are written to a temporary file in the destination directory,
/// flushed to disk and renamed over `path`. The destination ends up holding
/// exactly `contents`, like a create-or-truncate write.
///
/// # Behavior
///
/// - A symlinked destination is written through: the file it points to is
///   replaced and the link itself is kept
/// - An existing destination keeps its permissions
/// - A new destination gets mode `0644` on unix
/// - The parent directory is not created; a missing directory is an error
/// - On failure the destination is left as it was and the staged file is removed
///
/// # Errors
///
/// * [`io::ErrorKind::IsADirectory`] - If `path` names a directory
/// * Any error from following a symlink chain at `path`
/// * Any error from creating, writing, syncing or renaming the staged file
pub fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let resolved = resolve_symlinks(path)?;
    let path = resolved.as_path();

    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is a directory", path.display()),
        ));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = Builder::new()
        .prefix(".deploy-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    staged.write_all(contents)?;
    staged.as_file().sync_all()?;

    inherit_permissions(staged.path(), path)?;

    staged.persist(path).map_err(|e| e.error)?;
    tracing::debug!("Replaced {} ({} bytes)", path.display(), contents.len());

    Ok(())
}

/// Follow symlinks at `path` down to the file they name
///
/// The final target does not need to exist, so a dangling link resolves to
/// the path it points at and the write creates it.
fn resolve_symlinks(path: &Path) -> io::Result<PathBuf> {
    let mut current = path.to_path_buf();

    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let target = fs::read_link(&current)?;
                current = match current.parent() {
                    Some(parent) => parent.join(target),
                    None => target,
                };
            }
            Ok(_) => return Ok(current),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(current),
            Err(e) => return Err(e),
        }
    }

    Err(io::Error::other(format!(
        "too many levels of symbolic links at {}",
        path.display()
    )))
}

fn inherit_permissions(staged: &Path, target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) => fs::set_permissions(staged, meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => set_new_file_permissions(staged),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn set_new_file_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
