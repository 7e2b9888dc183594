//! Configuration system for the processing-element testbench.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline values for tracing and console output.
//! 2. **Structures:** Hierarchical config for general and harness settings.
//! 3. **Loading:** Parsing a JSON document from a string or file.
//!
//! The device itself has no tunables: its pipeline depth and reset values are
//! fixed in [`crate::common::constants`]. Use `Config::default()` for the stock run.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{Result, SimError};

/// Default configuration constants for the testbench.
mod defaults {
    /// Title printed inside the banner before the first scenario.
    pub const TITLE: &str = "PE Testbench (Internal Accumulator)";

    /// Whether the banner is printed at all.
    pub const BANNER: bool = true;
}

/// Root configuration for a testbench run.
///
/// All sections are optional in JSON; missing sections take their defaults.
///
/// # Examples
///
/// ```
/// use pesim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_cycles": true },
///     "harness": { "title": "PE smoke test" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_cycles);
/// assert_eq!(config.harness.title, "PE smoke test");
/// assert!(config.harness.banner);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Console output settings for the harness.
    #[serde(default)]
    pub harness: HarnessConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Parse`] if the document does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| SimError::Parse {
            what: "config",
            source,
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Parse`] if its contents are not a valid config.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every clock edge (stage contents and accumulator) at `debug` level.
    #[serde(default)]
    pub trace_cycles: bool,
}

/// Console output settings for the harness.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    /// Print the banner before the first scenario.
    #[serde(default = "HarnessConfig::default_banner")]
    pub banner: bool,

    /// Title shown inside the banner.
    #[serde(default = "HarnessConfig::default_title")]
    pub title: String,
}

impl HarnessConfig {
    /// Returns whether the banner is printed by default.
    const fn default_banner() -> bool {
        defaults::BANNER
    }

    /// Returns the default banner title.
    fn default_title() -> String {
        defaults::TITLE.to_owned()
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            banner: defaults::BANNER,
            title: defaults::TITLE.to_owned(),
        }
    }
}
