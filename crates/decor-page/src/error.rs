//! Decorator layer errors.
//!
//! Errors that can occur during decorator lifecycle operations.
//! All errors implement [`ErrorCode`] for unified handling.
//!
//! # Error Code Convention
//!
//! All decorator errors use the `DECORATOR_` prefix:
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`Settings`](DecoratorError::Settings) | `DECORATOR_SETTINGS` | No |
//! | [`InitFailed`](DecoratorError::InitFailed) | `DECORATOR_INIT_FAILED` | Yes |
//! | [`NotSupported`](DecoratorError::NotSupported) | `DECORATOR_NOT_SUPPORTED` | No |

use decor_types::ErrorCode;
use thiserror::Error;

/// Decorator layer error.
///
/// # Example
///
/// ```
/// use decor_page::DecoratorError;
/// use decor_types::ErrorCode;
///
/// let err = DecoratorError::InitFailed("store unreachable".into());
/// assert_eq!(err.code(), "DECORATOR_INIT_FAILED");
/// assert!(err.is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum DecoratorError {
    /// Settings serialization/deserialization failed.
    ///
    /// The persisted blob does not match the decorator's schema.
    ///
    /// **Not recoverable** - the stored content must be fixed or reset.
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Initialization failed.
    ///
    /// The decorator could not apply its settings.
    ///
    /// **Recoverable** - may succeed with different settings.
    #[error("initialization failed: {0}")]
    InitFailed(String),

    /// Operation not supported by this decorator.
    ///
    /// **Not recoverable** - the operation will never work.
    #[error("operation not supported: {0}")]
    NotSupported(String),
}

impl ErrorCode for DecoratorError {
    /// Returns a machine-readable error code.
    ///
    /// All decorator errors use the `DECORATOR_` prefix.
    fn code(&self) -> &'static str {
        match self {
            Self::Settings(_) => "DECORATOR_SETTINGS",
            Self::InitFailed(_) => "DECORATOR_INIT_FAILED",
            Self::NotSupported(_) => "DECORATOR_NOT_SUPPORTED",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, Self::InitFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decor_types::assert_error_codes;

    /// All variants for exhaustive testing
    fn all_variants() -> Vec<DecoratorError> {
        let decode_err =
            serde_json::from_str::<u32>("not a number").expect_err("should fail to parse");
        vec![
            DecoratorError::Settings(decode_err),
            DecoratorError::InitFailed("x".into()),
            DecoratorError::NotSupported("x".into()),
        ]
    }

    #[test]
    fn all_error_codes_valid() {
        assert_error_codes(&all_variants(), "DECORATOR_");
    }

    #[test]
    fn init_failed_error() {
        let err = DecoratorError::InitFailed("bad state".into());
        assert_eq!(err.code(), "DECORATOR_INIT_FAILED");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("initialization failed"));
    }

    #[test]
    fn not_supported_error() {
        let err = DecoratorError::NotSupported("unknown".into());
        assert_eq!(err.code(), "DECORATOR_NOT_SUPPORTED");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn settings_error_from_serde() {
        let decode_err =
            serde_json::from_str::<u32>("oops").expect_err("should fail to parse");
        let err = DecoratorError::from(decode_err);
        assert_eq!(err.code(), "DECORATOR_SETTINGS");
        assert!(!err.is_recoverable());
    }
}
