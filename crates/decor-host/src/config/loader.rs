//! Layered configuration loading.
//!
//! A [`HostConfig`] is assembled from an ordered list of TOML file
//! layers, then `DECOR_*` environment overrides:
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.decor/config.toml`)
//! 3. Project config (`<root>/.decor/config.toml`)
//! 4. Environment variables (`DECOR_*`)
//!
//! Missing layer files are skipped; files that exist but do not parse
//! are errors.

use super::{default_config_path, ConfigError, HostConfig, PROJECT_CONFIG_DIR, PROJECT_CONFIG_FILE};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Assembles a [`HostConfig`] from layered sources.
///
/// # Example
///
/// ```ignore
/// use decor_host::ConfigLoader;
///
/// // Defaults → ~/.decor/config.toml → <root>/.decor/config.toml → env
/// let config = ConfigLoader::new()
///     .with_project_root("/srv/ci")
///     .load()?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// File layers, read in order. Later layers override earlier ones.
    layers: Vec<PathBuf>,

    /// Apply `DECOR_*` overrides after the file layers.
    env: bool,
}

impl ConfigLoader {
    /// Standard layering: the global config file, then environment
    /// overrides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: vec![default_config_path()],
            env: true,
        }
    }

    /// No file layers and no environment overrides.
    ///
    /// Embedders and tests start here and add layers explicitly, so
    /// the result does not depend on the machine running the code.
    #[must_use]
    pub fn isolated() -> Self {
        Self {
            layers: Vec::new(),
            env: false,
        }
    }

    /// Appends a config file layer.
    #[must_use]
    pub fn with_layer(mut self, path: impl Into<PathBuf>) -> Self {
        self.layers.push(path.into());
        self
    }

    /// Appends the project layer, `<root>/.decor/config.toml`.
    #[must_use]
    pub fn with_project_root(self, root: impl AsRef<Path>) -> Self {
        let path = root
            .as_ref()
            .join(PROJECT_CONFIG_DIR)
            .join(PROJECT_CONFIG_FILE);
        self.with_layer(path)
    }

    /// Enables or disables `DECOR_*` environment overrides.
    #[must_use]
    pub fn with_env(mut self, env: bool) -> Self {
        self.env = env;
        self
    }

    /// Loads and merges all layers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a layer file exists but cannot be
    /// read or parsed, or when an environment override does not parse.
    /// Missing layer files are skipped.
    pub fn load(&self) -> Result<HostConfig, ConfigError> {
        let mut config = HostConfig::default();

        for path in &self.layers {
            if !path.exists() {
                continue;
            }

            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
            let layer = HostConfig::from_toml(&content).map_err(|e| ConfigError::parse(path, e))?;

            debug!(path = %path.display(), "config layer loaded");
            config.merge(&layer);
        }

        if self.env {
            apply_env(&mut config)?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `DECOR_*` overrides on top of the file layers.
fn apply_env(config: &mut HostConfig) -> Result<(), ConfigError> {
    if let Ok(val) = std::env::var("DECOR_DEBUG") {
        config.debug =
            parse_bool(&val).ok_or_else(|| ConfigError::env("DECOR_DEBUG", "expected bool"))?;
    }

    if let Ok(val) = std::env::var("DECOR_SETTINGS_PATH") {
        config.paths.settings_dir = Some(PathBuf::from(val));
    }

    Ok(())
}

/// Parses a boolean from string.
///
/// Accepts: "true", "false", "1", "0", "yes", "no", "on", "off"
/// (case-insensitive).
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
