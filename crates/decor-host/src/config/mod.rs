//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! Configuration is loaded from multiple sources with priority-based merging:
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌──────────────────────────────────────────┐
//! │  1. Environment Variables (DECOR_*)      │  Runtime override
//! ├──────────────────────────────────────────┤
//! │  2. Project Config (.decor/config.toml)  │  Project-specific
//! ├──────────────────────────────────────────┤
//! │  3. Global Config (~/.decor/config.toml) │  User defaults
//! ├──────────────────────────────────────────┤
//! │  4. Default Values (compile-time)        │  Fallback
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Directory Structure
//!
//! ```text
//! ~/.decor/                    # Global Decor directory
//! ├── config.toml              # Global configuration
//! └── settings/                # Decorator settings (separate from config)
//!     └── builtin.ciborg.json
//!
//! <project>/.decor/            # Project-local Decor directory
//! └── config.toml              # Project configuration (overrides global)
//! ```
//!
//! # Config vs Settings Separation
//!
//! | Aspect | Config | Settings |
//! |--------|--------|----------|
//! | Format | TOML | JSON |
//! | Scope | Global / Project | Per-decorator |
//! | Written by | Operator | Host (admin submissions) |
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `DECOR_DEBUG` | `debug` | bool |
//! | `DECOR_SETTINGS_PATH` | `paths.settings_dir` | PathBuf |
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.decor/config.toml
//!
//! debug = false
//!
//! [paths]
//! settings_dir = "~/.decor/settings"
//!
//! [decorators]
//! load = ["ciborg", "lobot"]
//! ```

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use types::{DecoratorsConfig, HostConfig, PathsConfig};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".decor")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".decor";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
