//! Host layer errors.
//!
//! Errors surfaced by host operations (registration, configuration
//! submission, startup). All implement [`ErrorCode`].
//!
//! # Error Code Convention
//!
//! All host errors use the `HOST_` prefix:
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`DecoratorNotFound`](HostError::DecoratorNotFound) | `HOST_DECORATOR_NOT_FOUND` | No |
//! | [`DuplicateDecorator`](HostError::DuplicateDecorator) | `HOST_DUPLICATE_DECORATOR` | No |
//! | [`Form`](HostError::Form) | `HOST_FORM_REJECTED` | Yes |
//! | [`Decorator`](HostError::Decorator) | `HOST_DECORATOR` | inner |
//! | [`Storage`](HostError::Storage) | `HOST_STORAGE` | inner |

use crate::StorageError;
use decor_page::{DecoratorError, FormError};
use decor_types::ErrorCode;
use thiserror::Error;

/// Host layer error.
///
/// # Example
///
/// ```
/// use decor_host::HostError;
/// use decor_types::ErrorCode;
///
/// let err = HostError::DecoratorNotFound("builtin::ciborg".into());
/// assert_eq!(err.code(), "HOST_DECORATOR_NOT_FOUND");
/// assert!(!err.is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum HostError {
    /// No decorator registered under the given FQN.
    #[error("decorator not found: {0}")]
    DecoratorNotFound(String),

    /// A decorator with this FQN is already registered.
    #[error("decorator already registered: {0}")]
    DuplicateDecorator(String),

    /// The decorator rejected the submitted form.
    ///
    /// Nothing was persisted; the admin can correct and resubmit.
    #[error("form rejected: {0}")]
    Form(#[from] FormError),

    /// A decorator lifecycle operation failed.
    #[error("decorator error: {0}")]
    Decorator(#[from] DecoratorError),

    /// Settings storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl HostError {
    /// Creates a DecoratorNotFound error.
    pub fn decorator_not_found(fqn: impl Into<String>) -> Self {
        Self::DecoratorNotFound(fqn.into())
    }
}

impl ErrorCode for HostError {
    /// Returns a machine-readable error code.
    ///
    /// All host errors use the `HOST_` prefix.
    fn code(&self) -> &'static str {
        match self {
            Self::DecoratorNotFound(_) => "HOST_DECORATOR_NOT_FOUND",
            Self::DuplicateDecorator(_) => "HOST_DUPLICATE_DECORATOR",
            Self::Form(_) => "HOST_FORM_REJECTED",
            Self::Decorator(_) => "HOST_DECORATOR",
            Self::Storage(_) => "HOST_STORAGE",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::DecoratorNotFound(_) | Self::DuplicateDecorator(_) => false,
            Self::Form(e) => e.is_recoverable(),
            Self::Decorator(e) => e.is_recoverable(),
            Self::Storage(e) => e.is_recoverable(),
        }
    }
}
