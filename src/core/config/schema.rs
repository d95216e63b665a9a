//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$COQGRAPH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/coqgraph/config.toml`
//! 3. `~/.coqgraph/config.toml`
//!
//! # Project Config
//!
//! Located at `.coqgraph.toml` beside the project manifest.
//!
//! # Validation
//!
//! Config values are validated after parsing; in particular the colour
//! scheme must be one the emitter knows how to reference.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::palette::ColourScheme;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// scheme = "pastel19"
/// url_template = "html/\\N.html"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Colour scheme name (`pastel19` or `set312`)
    pub scheme: Option<String>,

    /// URL attribute template for emitted nodes
    pub url_template: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_scheme(self.scheme.as_deref())
    }
}

/// Project configuration (per-development scope).
///
/// Same fields as [`GlobalConfig`]; project values override global ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Colour scheme name (`pastel19` or `set312`)
    pub scheme: Option<String>,

    /// URL attribute template for emitted nodes
    pub url_template: Option<String>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_scheme(self.scheme.as_deref())
    }
}

fn validate_scheme(scheme: Option<&str>) -> Result<(), ConfigError> {
    if let Some(name) = scheme {
        if ColourScheme::from_name(name).is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "invalid scheme '{}', must be one of: {}",
                name,
                ColourScheme::valid_names().join(", ")
            )));
        }
    }
    Ok(())
}
