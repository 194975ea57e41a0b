//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers.
///
/// # Serialization
///
/// Serializes to TOML for file storage. Fields with `#[serde(default)]`
/// are optional in the config file.
///
/// # Example
///
/// ```
/// use decor_host::config::HostConfig;
///
/// let config = HostConfig::default();
/// assert!(!config.debug);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Enable debug mode (verbose logging, diagnostics).
    pub debug: bool,

    /// Path configuration.
    pub paths: PathsConfig,

    /// Decorator loading configuration.
    pub decorators: DecoratorsConfig,
}

impl HostConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if they
    /// differ from the default. This enables layered configuration.
    pub fn merge(&mut self, other: &Self) {
        let default = Self::default();

        // Only override if other differs from default
        if other.debug != default.debug {
            self.debug = other.debug;
        }

        self.paths.merge(&other.paths);
        self.decorators.merge(&other.decorators);
    }

    /// Returns the settings directory, falling back to default.
    #[must_use]
    pub fn settings_dir_or_default(&self) -> PathBuf {
        self.paths.settings_dir_or_default()
    }
}

/// Path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Settings storage directory.
    ///
    /// When `None`, defaults to `~/.decor/settings`.
    pub settings_dir: Option<PathBuf>,
}

impl PathsConfig {
    fn merge(&mut self, other: &Self) {
        if other.settings_dir.is_some() {
            self.settings_dir = other.settings_dir.clone();
        }
    }

    /// Returns the settings directory, falling back to default.
    #[must_use]
    pub fn settings_dir_or_default(&self) -> PathBuf {
        self.settings_dir
            .clone()
            .unwrap_or_else(crate::store::default_settings_path)
    }
}

/// Decorator loading configuration.
///
/// Controls which builtin decorators are registered at startup.
///
/// # Example TOML
///
/// ```toml
/// [decorators]
/// load = ["ciborg", "lobot"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecoratorsConfig {
    /// Builtin decorator names to register at startup.
    pub load: Vec<String>,
}

impl Default for DecoratorsConfig {
    fn default() -> Self {
        Self {
            load: vec!["ciborg".into(), "lobot".into()],
        }
    }
}

impl DecoratorsConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.load != default.load {
            self.load = other.load.clone();
        }
    }
}
