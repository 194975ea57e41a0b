//! Core types for Decor.
//!
//! This crate provides foundational identifier and error types for the
//! Decor page-decoration host.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Decorator SDK Layer                       │
//! │  (External, SemVer stable, safe to depend on)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  decor-types : DecoratorId, ErrorCode           ◄── HERE    │
//! │  decor-page  : PageDecorator trait, FormData, Settings      │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Runtime Layer                             │
//! │  (Internal implementation, NOT for decorators)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  decor-host  : registry, settings store, PageHost driver    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Identifier Design
//!
//! Decorator identifiers are UUID-based:
//!
//! - **Stable persistence keys**: builtin decorators get deterministic
//!   UUID v5 identities, so persisted settings survive restarts
//! - **Serialization**: first-class serde support
//!
//! # Example
//!
//! ```
//! use decor_types::DecoratorId;
//!
//! // Builtin decorators have deterministic UUIDs
//! let ciborg = DecoratorId::builtin("ciborg");
//! let again = DecoratorId::builtin("ciborg");
//! assert_eq!(ciborg, again);  // Same UUID
//!
//! // Custom decorators get random UUIDs
//! let plugin = DecoratorId::new("plugin", "banner");
//! assert!(!plugin.is_builtin());
//! ```

mod error;
mod id;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::DecoratorId;
