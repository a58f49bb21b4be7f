//! Application configuration
//!
//! Runtime settings come from three layers, highest priority first:
//! command line flags, an optional TOML file given with `--config`, and the
//! built-in defaults below.
//!
//! ```toml
//! [number]
//! decimals = 2
//! prefix = "$"
//! empty_value = "N/A"
//!
//! [pad]
//! fill = "0"
//! ```

use crate::error::{ShapeError, ShapeResult};
use crate::format::NumberFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Settings file passed on the command line
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            config_path: None,
        }
    }

    /// Set the settings file
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Load the settings file, or the defaults when none was given
    ///
    /// An unreadable file is a configuration error, so it exits like a bad
    /// flag rather than like bad input.
    pub fn load_settings(&self) -> ShapeResult<Settings> {
        let Some(path) = &self.config_path else {
            return Ok(Settings::default());
        };

        Settings::load(path).map_err(|e| match e {
            ShapeError::Io { path, source } => ShapeError::Config(format!(
                "Could not read settings file {}: {}",
                path.display(),
                source
            )),
            other => other,
        })
    }
}

/// Defaults read from the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub number: NumberFormat,
    pub pad: PadSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PadSettings {
    /// Fill character used when `--fill` is not given
    pub fill: char,
}

impl Default for PadSettings {
    fn default() -> Self {
        Self { fill: ' ' }
    }
}

impl Settings {
    /// Read settings from a TOML file
    pub fn load(path: &Path) -> ShapeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShapeError::io(path, e))?;
        let settings = Self::from_toml_str(&content)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> ShapeResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
