//! Admin form submission data.
//!
//! [`FormData`] is the parsed body of an administrative form submission:
//! a map of field name to JSON value. The host passes it to
//! [`PageDecorator::configure`](crate::PageDecorator::configure) untouched;
//! validation happens in the decorator and surfaces as [`FormError`].

use decor_types::ErrorCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by form validation.
///
/// A `FormError` from [`configure`](crate::PageDecorator::configure) means
/// the submission was rejected. The host surfaces it to the caller
/// unmodified and leaves live state untouched.
///
/// # Error Code Convention
///
/// All form errors use the `FORM_` prefix:
///
/// | Error | Code | Recoverable |
/// |-------|------|-------------|
/// | [`Rejected`](FormError::Rejected) | `FORM_REJECTED` | Yes |
/// | [`MissingField`](FormError::MissingField) | `FORM_MISSING_FIELD` | Yes |
/// | [`InvalidField`](FormError::InvalidField) | `FORM_INVALID_FIELD` | Yes |
/// | [`NotAnObject`](FormError::NotAnObject) | `FORM_NOT_AN_OBJECT` | No |
/// | [`Decode`](FormError::Decode) | `FORM_DECODE` | Yes |
#[derive(Debug, Error)]
pub enum FormError {
    /// Submission rejected by decorator validation.
    ///
    /// **Recoverable** - the admin can correct the form and resubmit.
    #[error("form rejected: {field}: {message}")]
    Rejected {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// A required field was absent from the submission.
    ///
    /// **Recoverable** - resubmit with the field filled in.
    #[error("missing form field: {0}")]
    MissingField(String),

    /// A field was present but held an unusable value.
    ///
    /// **Recoverable** - resubmit with a corrected value.
    #[error("invalid form field: {field}: {message}")]
    InvalidField {
        /// The offending field.
        field: String,
        /// Why the value is unusable.
        message: String,
    },

    /// The submission body was not a JSON object.
    ///
    /// **Not recoverable** - fix the caller, not the form.
    #[error("form data must be a JSON object")]
    NotAnObject,

    /// Typed decode of the form failed.
    ///
    /// **Recoverable** - the admin can correct the offending fields.
    #[error("form decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FormError {
    /// Creates a Rejected error.
    pub fn rejected(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a MissingField error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Creates an InvalidField error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ErrorCode for FormError {
    fn code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "FORM_REJECTED",
            Self::MissingField(_) => "FORM_MISSING_FIELD",
            Self::InvalidField { .. } => "FORM_INVALID_FIELD",
            Self::NotAnObject => "FORM_NOT_AN_OBJECT",
            Self::Decode(_) => "FORM_DECODE",
        }
    }

    fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NotAnObject)
    }
}

/// Parsed body of an admin form submission.
///
/// Fields are kept sorted by name, so serialization is deterministic
/// and persisted settings stay diffable.
///
/// # Example
///
/// ```
/// use decor_page::FormData;
/// use serde_json::json;
///
/// let mut form = FormData::new();
/// form.set("footer_html", json!("<p>hi</p>"));
/// form.set("enabled", json!(true));
///
/// assert_eq!(form.get_str("footer_html"), Some("<p>hi</p>"));
/// assert_eq!(form.get_bool("enabled"), Some(true));
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds form data from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotAnObject`] if the value is not a JSON object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FormError> {
        match value {
            serde_json::Value::Object(fields) => Ok(Self { fields }),
            _ => Err(FormError::NotAnObject),
        }
    }

    /// Builds form data from name/value pairs.
    #[must_use]
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.fields.insert(name.into(), value);
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    /// Returns a field as a string slice, if it is a JSON string.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }

    /// Returns a field as a bool, if it is a JSON boolean.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.fields.get(name).and_then(|v| v.as_bool())
    }

    /// Returns `true` if the field is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the form as a JSON object value.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.fields.clone())
    }

    /// Decodes the form into a typed settings struct.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Decode`] if the fields do not match the
    /// target type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        Ok(serde_json::from_value(self.to_value())?)
    }
}
