use std::path::PathBuf;

use derive_getters::Getters;

/// Name of the settings module inside a project directory
pub const SETTINGS_FILE_NAME: &str = "settings.py";

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Getters)]
pub struct Config {
    project_name: String,
    root: PathBuf,
    settings_override: Option<PathBuf>,
    hosts: Vec<String>,
}

impl Config {
    pub fn new(project_name: impl Into<String>, root: impl Into<PathBuf>, hosts: Vec<String>) -> Self {
        Self {
            project_name: project_name.into(),
            root: root.into(),
            settings_override: None,
            hosts,
        }
    }

    /// Target an explicit settings file instead of `<root>/<project>/settings.py`
    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_override = Some(path.into());
        self
    }

    /// The settings file this configuration points at, if it names one
    pub fn settings_file(&self) -> Option<PathBuf> {
        match &self.settings_override {
            Some(path) if !path.as_os_str().is_empty() => Some(path.clone()),
            _ if !self.project_name.is_empty() => Some(
                self.root
                    .join(&self.project_name)
                    .join(SETTINGS_FILE_NAME),
            ),
            _ => None,
        }
    }
}
