//! Configuration management for pagewright
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. Hardcoded defaults
//! 2. The configuration file: the path given by the caller, or
//!    `./pagewright.toml` when none is given and it exists
//!
//! Environment variables are not consulted.
//!
//! # Example Configuration
//!
//! ```toml
//! # pagewright.toml
//! [templates]
//! base_dir = "./templates"
//! autoescape = true
//! strict_undefined = false
//! trim_blocks = false
//! lstrip_blocks = false
//!
//! [render]
//! default_layout = "app_layout"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pagewright::config::PagewrightConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PagewrightConfig::load(None)?;
//! let base = &config.templates.base_dir;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "pagewright.toml";

/// Template engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory holding `root.html`, `partials/`, `layouts/` and `pages/`
    pub base_dir: PathBuf,

    /// HTML-escape every substituted value
    pub autoescape: bool,

    /// Fail rendering when a template uses an undefined value
    pub strict_undefined: bool,

    /// Remove the first newline after a block tag
    pub trim_blocks: bool,

    /// Strip whitespace before a block tag on the same line
    pub lstrip_blocks: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./templates"),
            autoescape: true,
            strict_undefined: false,
            trim_blocks: false,
            lstrip_blocks: false,
        }
    }
}

impl TemplateSettings {
    /// Default settings rooted at `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Enable or disable HTML escaping
    #[must_use]
    pub const fn with_autoescape(mut self, enabled: bool) -> Self {
        self.autoescape = enabled;
        self
    }

    /// Enable or disable strict undefined handling
    #[must_use]
    pub const fn with_strict_undefined(mut self, enabled: bool) -> Self {
        self.strict_undefined = enabled;
        self
    }

    /// Enable or disable `trim_blocks` and `lstrip_blocks` together
    #[must_use]
    pub const fn with_block_trimming(mut self, enabled: bool) -> Self {
        self.trim_blocks = enabled;
        self.lstrip_blocks = enabled;
        self
    }
}

/// Rendering defaults for command-line use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Layout used when none is requested explicitly
    pub default_layout: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            default_layout: "app_layout".to_string(),
        }
    }
}

/// Complete pagewright configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagewrightConfig {
    /// Template engine settings
    #[serde(default)]
    pub templates: TemplateSettings,

    /// Rendering defaults
    #[serde(default)]
    pub render: RenderSettings,
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist
    #[error("configuration file not found: {}", .0.display())]
    Missing(PathBuf),

    /// A file could not be parsed or had values of the wrong type
    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

impl PagewrightConfig {
    /// Load configuration from defaults and an optional file
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    /// Without a path, `./pagewright.toml` is used if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if `path` does not exist and
    /// [`ConfigError::Invalid`] if the file cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Self::default()));

        let figment = match path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            Some(path) if path.extension().is_some_and(|ext| ext == "json") => {
                figment.merge(Json::file(path))
            }
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };

        Ok(figment.extract()?)
    }

    /// Replace the template base directory
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.templates.base_dir = base_dir.into();
        self
    }
}
