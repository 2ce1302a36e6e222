use std::path::PathBuf;

use crate::{
    config::Config,
    errors::{HostsError, HostsResult},
};

/// Resolve the settings file and check that it exists
///
/// # Errors
///
/// * [`HostsError::MissingArgument`] - Neither a project name nor a settings file was given
/// * [`HostsError::FileNotFound`] - The resolved path is not a regular file
pub fn resolve_settings_file(config: &Config) -> HostsResult<PathBuf> {
    let path = config
        .settings_file()
        .ok_or_else(|| HostsError::MissingArgument {
            argument: "project_name".to_string(),
        })?;

    if !path.is_file() {
        return Err(HostsError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_project_name() {
        let result = resolve_settings_file(&Config::new("", ".", vec![]));
        assert!(matches!(result, Err(HostsError::MissingArgument { .. })));
    }

    #[test]
    fn test_missing_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("blog")).unwrap();

        let result = resolve_settings_file(&Config::new("blog", temp_dir.path(), vec![]));
        assert!(matches!(result, Err(HostsError::FileNotFound { .. })));
    }

    #[test]
    fn test_existing_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("blog");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("settings.py"), "ALLOWED_HOSTS = []\n").unwrap();

        let path = resolve_settings_file(&Config::new("blog", temp_dir.path(), vec![])).unwrap();
        assert_eq!(path, project.join("settings.py"));
    }
}
