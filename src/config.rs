//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/empman/empman.toml`
//! 3. Environment variables: `EMPMAN_*` prefix
//! 4. Command line (`--file`), applied by the CLI layer

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "Files/Employees.json";

/// Unified configuration for empman.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// JSON file holding the employee records
    pub data_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
}

/// Get the XDG config directory for empman.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "empman").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("empman.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_file.to_string_lossy().as_ref());
        self.data_file = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay
                .data_file
                .clone()
                .unwrap_or_else(|| self.data_file.clone()),
        }
    }

    /// Load settings with layered precedence, using the global config file
    /// if one exists.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` as the global config layer.
    ///
    /// A `None` or non-existent file is skipped.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply EMPMAN_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("EMPMAN")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Replace the data file (command line override), expanding `~` and `$VAR`.
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self.expand_paths();
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
