//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Coqgraph has two configuration scopes:
//! - **Global**: user-level settings
//! - **Project**: per-development overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides
//! earlier):
//! 1. Built-in defaults
//! 2. Global config file
//! 3. Project config file
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$COQGRAPH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/coqgraph/config.toml`
//! 3. `~/.coqgraph/config.toml`
//!
//! # Project Config Location
//!
//! `.coqgraph.toml` in the directory holding the project manifest.
//!
//! # Example
//!
//! ```no_run
//! use coqgraph::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! println!("Scheme: {}", config.scheme().name);
//! ```

pub mod schema;

pub use schema::{GlobalConfig, ProjectConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::palette::ColourScheme;

/// Node URL template used when no configuration overrides it. `\N` is
/// dot's placeholder for the node name.
const DEFAULT_URL_TEMPLATE: &str = "html/\\N.html";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence automatically: project config
/// overrides global config, which overrides defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Project configuration (if a project file was found)
    pub project: Option<ProjectConfig>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also looks for `.coqgraph.toml`
    /// there.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or
    /// fail validation. Missing config files are not an error; defaults
    /// apply.
    pub fn load(project_dir: Option<&Path>) -> Result<Config, ConfigError> {
        let global = Self::load_global()?;

        let project = match project_dir {
            Some(dir) => Self::load_project(dir)?,
            None => None,
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        Ok(Config { global, project })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<GlobalConfig, ConfigError> {
        if let Ok(path) = std::env::var("COQGRAPH_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::read_toml(&path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("coqgraph/config.toml");
            if path.exists() {
                return Self::read_toml(&path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".coqgraph/config.toml");
            if path.exists() {
                return Self::read_toml(&path);
            }
        }

        Ok(GlobalConfig::default())
    }

    /// Load project configuration if present.
    fn load_project(project_dir: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
        let path = project_dir.join(".coqgraph.toml");
        if !path.exists() {
            return Ok(None);
        }
        Self::read_toml(&path).map(Some)
    }

    /// Read and parse a TOML config file.
    fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The colour scheme to use, with precedence applied.
    ///
    /// Validation at load time guarantees any configured name resolves,
    /// so an unrecognised value can only mean the default.
    pub fn scheme(&self) -> ColourScheme {
        let name = self
            .project
            .as_ref()
            .and_then(|p| p.scheme.as_deref())
            .or(self.global.scheme.as_deref());

        name.and_then(ColourScheme::from_name).unwrap_or_default()
    }

    /// The node URL template, with precedence applied.
    pub fn url_template(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.url_template.as_deref())
            .or(self.global.url_template.as_deref())
            .unwrap_or(DEFAULT_URL_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_default_scheme() {
        let config = Config::default();
        assert_eq!(config.scheme(), ColourScheme::default());
        assert_eq!(config.url_template(), "html/\\N.html");
    }

    #[test]
    fn global_scheme_applies() {
        let config = Config {
            global: GlobalConfig {
                scheme: Some("pastel19".to_string()),
                ..Default::default()
            },
            project: None,
        };
        assert_eq!(config.scheme().name, "pastel19");
        assert_eq!(config.scheme().n_col, 9);
    }

    #[test]
    fn project_overrides_global() {
        let config = Config {
            global: GlobalConfig {
                scheme: Some("pastel19".to_string()),
                url_template: Some("a/\\N.html".to_string()),
            },
            project: Some(ProjectConfig {
                scheme: Some("set312".to_string()),
                url_template: None,
            }),
        };
        // Project scheme wins; absent project url falls back to global.
        assert_eq!(config.scheme().name, "set312");
        assert_eq!(config.url_template(), "a/\\N.html");
    }

    #[test]
    fn project_file_is_loaded_when_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".coqgraph.toml"), "scheme = \"pastel19\"\n").unwrap();

        let project = Config::load_project(dir.path()).unwrap().unwrap();
        assert_eq!(project.scheme.as_deref(), Some("pastel19"));
    }

    #[test]
    fn missing_project_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_project(dir.path()).unwrap().is_none());
    }

    #[test]
    fn unparsable_project_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".coqgraph.toml"), "scheme = [not toml").unwrap();
        assert!(Config::load_project(dir.path()).is_err());
    }
}
