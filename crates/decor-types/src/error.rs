//! Unified error interface for Decor.
//!
//! This module provides the [`ErrorCode`] trait for standardized
//! error handling across all Decor crates.
//!
//! # Design
//!
//! All Decor error types should implement [`ErrorCode`] to provide:
//!
//! - **Machine-readable codes**: For programmatic error handling
//! - **Recoverability info**: For user feedback
//!
//! # Example
//!
//! ```
//! use decor_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum MyError {
//!     NotFound(String),
//!     Rejected,
//! }
//!
//! impl ErrorCode for MyError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::NotFound(_) => "NOT_FOUND",
//!             Self::Rejected => "REJECTED",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Rejected)
//!     }
//! }
//!
//! let err = MyError::Rejected;
//! assert_eq!(err.code(), "REJECTED");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for Decor errors.
///
/// Implement this trait for all error types to enable:
///
/// - Consistent error code format across crates
/// - Unified error handling in the host driver
/// - Standardized logging
///
/// # Code Format
///
/// Error codes should be:
///
/// - **UPPER_SNAKE_CASE**: e.g., `"NOT_FOUND"`, `"REJECTED"`
/// - **Namespace-prefixed for specificity**: e.g., `"FORM_MISSING_FIELD"`, `"HOST_DECORATOR_NOT_FOUND"`
/// - **Stable**: Codes should not change once defined (API contract)
///
/// # Recoverability
///
/// An error is recoverable if:
///
/// - Retrying the operation may succeed
/// - The user can take action to fix it (e.g., correct a form field)
///
/// Non-recoverable errors:
///
/// - Invalid input that won't change on retry
/// - Internal errors (bugs)
///
/// # Example Implementation
///
/// ```
/// use decor_types::ErrorCode;
///
/// enum FormError {
///     MissingField(String),
///     NotAnObject,
/// }
///
/// impl ErrorCode for FormError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::MissingField(_) => "FORM_MISSING_FIELD",
///             Self::NotAnObject => "FORM_NOT_AN_OBJECT",
///         }
///     }
///
///     fn is_recoverable(&self) -> bool {
///         match self {
///             // Admin can resubmit with the field filled in
///             Self::MissingField(_) => true,
///             // Malformed body, fix the caller
///             Self::NotAnObject => false,
///         }
///     }
/// }
/// ```
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    ///
    /// # Format
    ///
    /// - UPPER_SNAKE_CASE
    /// - Optionally prefixed with domain (e.g., `"FORM_"`, `"HOST_"`)
    /// - Stable across versions (breaking change if modified)
    ///
    /// # Examples
    ///
    /// - `"FORM_MISSING_FIELD"`
    /// - `"DECORATOR_INIT_FAILED"`
    /// - `"HOST_DUPLICATE_DECORATOR"`
    fn code(&self) -> &'static str;

    /// Returns whether the error is recoverable.
    ///
    /// # Returns
    ///
    /// - `true`: Retry may succeed, or user can take corrective action
    /// - `false`: Retry will not help, requires code/config change
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows Decor conventions.
///
/// # Checks
///
/// 1. Code is UPPER_SNAKE_CASE
/// 2. Code starts with expected prefix
/// 3. Code is not empty
///
/// # Panics
///
/// Panics with descriptive message if validation fails.
///
/// # Example
///
/// ```
/// use decor_types::{ErrorCode, assert_error_code};
///
/// #[derive(Debug)]
/// enum MyError { Rejected }
///
/// impl ErrorCode for MyError {
///     fn code(&self) -> &'static str { "MY_REJECTED" }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// let err = MyError::Rejected;
/// assert_error_code(&err, "MY_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    // Check not empty
    assert!(!code.is_empty(), "Error code must not be empty");

    // Check prefix
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );

    // Check UPPER_SNAKE_CASE
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates multiple error codes at once.
///
/// Use this to verify all variants of an error enum.
///
/// # Example
///
/// ```
/// use decor_types::{ErrorCode, assert_error_codes};
///
/// #[derive(Debug)]
/// enum MyError { A, B }
///
/// impl ErrorCode for MyError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::A => "MY_A",
///             Self::B => "MY_B",
///         }
///     }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_codes(&[MyError::A, MyError::B], "MY_");
/// ```
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    // Must not start or end with underscore
    if s.starts_with('_') || s.ends_with('_') {
        return false;
    }

    // Must not have consecutive underscores
    if s.contains("__") {
        return false;
    }

    // All chars must be uppercase letters, digits, or underscore
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
