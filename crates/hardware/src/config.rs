//! Configuration for a probe run.
//!
//! This module defines the configuration structures that parameterize a run. It provides:
//! 1. **Defaults:** Every field has a default, so `{}` is a complete config.
//! 2. **Structures:** General (tracing) and harness (suites, vectors, report) sections.
//! 3. **Loading:** JSON parsing via `serde_json`, from a string or a file.
//!
//! Command-line flags override whatever a config file supplies.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::probe::suites::SuiteSelector;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid configuration document.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Harness settings.
    #[serde(default)]
    pub harness: HarnessConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// `ConfigError::Parse` if the text is not valid JSON or names an unknown
    /// field or suite.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if
    /// its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit a `trace` event (with disassembly) for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Harness settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Built-in suites to run, in order.
    #[serde(default = "HarnessConfig::default_suites")]
    pub suites: Vec<SuiteSelector>,

    /// Print the per-case `i=.., c[i]=..` lines.
    #[serde(default = "HarnessConfig::default_print_cases")]
    pub print_cases: bool,

    /// JSON vector file run after the built-in suites.
    #[serde(default)]
    pub vectors: Option<PathBuf>,
}

impl HarnessConfig {
    fn default_suites() -> Vec<SuiteSelector> {
        vec![SuiteSelector::All]
    }

    const fn default_print_cases() -> bool {
        true
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            suites: Self::default_suites(),
            print_cases: Self::default_print_cases(),
            vectors: None,
        }
    }
}
