//! Configuration errors.
//!
//! # Error Code Convention
//!
//! All configuration errors use the `CONFIG_` prefix:
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`Read`](ConfigError::Read) | `CONFIG_READ` | Yes |
//! | [`Parse`](ConfigError::Parse) | `CONFIG_PARSE` | Yes |
//! | [`Env`](ConfigError::Env) | `CONFIG_ENV` | Yes |
//!
//! Every variant points at something the operator can correct (a file,
//! a variable) and retry, so all of them are recoverable.

use decor_types::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling host configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config layer file exists but could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config layer file is not valid TOML for [`HostConfig`].
    ///
    /// [`HostConfig`]: super::HostConfig
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A `DECOR_*` environment override held an unusable value.
    #[error("invalid value for environment variable '{name}': {message}")]
    Env { name: String, message: String },
}

impl ConfigError {
    /// Creates a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates an environment override error.
    pub fn env(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Env {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CONFIG_READ",
            Self::Parse { .. } => "CONFIG_PARSE",
            Self::Env { .. } => "CONFIG_ENV",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}
