//! Settings and configuration utilities.
//!
//! This module reads settings from $HOME/.commit-lint/settings.json and uses
//! them as a fallback for environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable selecting the default output format.
pub const FORMAT_VAR: &str = "COMMIT_LINT_FORMAT";

/// Environment variable disabling colored output when set to any value.
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Settings loaded from $HOME/.commit-lint/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default settings
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".commit-lint").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Default output format, if configured.
    pub fn output_format(&self) -> Option<String> {
        self.get_env_var(FORMAT_VAR)
    }

    /// Whether colors were disabled through `NO_COLOR`.
    pub fn no_color(&self) -> bool {
        self.get_env_var(NO_COLOR_VAR).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let settings_json = r#"{
            "env": {
                "COMMIT_LINT_TEST_FORMAT": "json",
                "COMMIT_LINT_TEST_OTHER": "value"
            }
        }"#;
        fs::write(&settings_path, settings_json).unwrap();

        let settings = Settings::load_from_path(&settings_path).unwrap();

        assert_eq!(settings.env.get("COMMIT_LINT_TEST_FORMAT").unwrap(), "json");
        assert_eq!(settings.env.get("COMMIT_LINT_TEST_OTHER").unwrap(), "value");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(&settings_path, "{ not json").unwrap();

        let err = Settings::load_from_path(&settings_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn settings_fill_in_unset_variables() {
        let mut settings = Settings::default();
        settings.env.insert(
            "COMMIT_LINT_TEST_UNSET_VAR".to_string(),
            "from_settings".to_string(),
        );

        assert_eq!(
            settings.get_env_var("COMMIT_LINT_TEST_UNSET_VAR").as_deref(),
            Some("from_settings")
        );
        assert_eq!(settings.get_env_var("COMMIT_LINT_TEST_NEVER_SET"), None);
    }
}
