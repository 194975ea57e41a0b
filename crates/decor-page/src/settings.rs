//! Persisted decorator settings.
//!
//! [`Settings`] is the opaque configuration blob the host persists per
//! decorator. The persistence layer never interprets the content; each
//! decorator defines its own schema and decodes it in
//! [`init`](crate::PageDecorator::init).
//!
//! # Example
//!
//! ```
//! use decor_page::Settings;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct FooterSettings {
//!     footer_html: String,
//! }
//!
//! let original = FooterSettings { footer_html: "<p>hi</p>".into() };
//! let settings = Settings::new(&original).unwrap();
//! let restored: FooterSettings = settings.to_content().unwrap();
//! assert_eq!(original, restored);
//! ```

use crate::DecoratorError;
use serde::{Deserialize, Serialize};

/// Current settings format version.
pub const SETTINGS_VERSION: u32 = 1;

/// Opaque persisted configuration for one decorator.
///
/// Contains a format version and a JSON content value. [`Default`]
/// produces an empty object, the state of a decorator with no prior
/// saved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Settings format version.
    pub version: u32,

    /// Decorator-specific configuration.
    pub content: serde_json::Value,
}

impl Settings {
    /// Creates settings from serializable content.
    ///
    /// # Errors
    ///
    /// Returns [`DecoratorError::Settings`] if the content cannot be
    /// serialized.
    pub fn new<T: Serialize>(content: &T) -> Result<Self, DecoratorError> {
        Ok(Self {
            version: SETTINGS_VERSION,
            content: serde_json::to_value(content)?,
        })
    }

    /// Creates settings with raw JSON content.
    #[must_use]
    pub fn from_value(content: serde_json::Value) -> Self {
        Self {
            version: SETTINGS_VERSION,
            content,
        }
    }

    /// Deserializes the content into a typed settings struct.
    ///
    /// # Errors
    ///
    /// Returns [`DecoratorError::Settings`] if deserialization fails.
    pub fn to_content<T: for<'de> Deserialize<'de>>(&self) -> Result<T, DecoratorError> {
        Ok(serde_json::from_value(self.content.clone())?)
    }

    /// Returns `true` if the content is an empty object.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.as_object().is_some_and(|m| m.is_empty())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            content: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}
