//! Decorator SDK for Decor.
//!
//! This crate provides the decorator abstraction layer for the Decor
//! page-decoration host.
//!
//! # Crate Architecture
//!
//! This crate is part of the **Decorator SDK** layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Decorator SDK Layer                       │
//! │  (External, SemVer stable, safe to depend on)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  decor-types : DecoratorId, ErrorCode                       │
//! │  decor-page  : PageDecorator trait, FormData    ◄── HERE    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Decoration Architecture Overview
//!
//! Decorators are host-driven: the host loads each decorator's persisted
//! settings at startup, routes admin form submissions to it, and collects
//! its page fragment on every render.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          PageHost                            │
//! │   - startup:  load settings, init each decorator             │
//! │   - submit:   configure → persist → re-init                  │
//! │   - render:   collect fragments                              │
//! └──────────────────────────────────────────────────────────────┘
//!            │
//!            ├──────────────────┬──────────────────┐
//!            ▼                  ▼                  ▼
//!      ┌──────────┐       ┌──────────┐       ┌──────────┐
//!      │  ciborg  │       │  lobot   │       │  plugin  │
//!      │decorator │       │decorator │       │decorator │
//!      └──────────┘       └──────────┘       └──────────┘
//! ```
//!
//! # Persistence Model
//!
//! | Type | Owner | Interpreted by |
//! |------|-------|----------------|
//! | [`FormData`] | Admin submission | Decorator (`configure`) |
//! | [`Settings`] | Host storage | Decorator (`init`) |
//! | [`PageFragment`] | Render output | Host page assembly |
//!
//! Decorators never touch storage. The host persists the submitted
//! form (exactly one write per submission, before validation) and
//! re-applies the [`Settings`] returned by `configure` via `init`.
//!
//! # Error Handling
//!
//! All errors implement [`decor_types::ErrorCode`] for unified handling:
//!
//! ```
//! use decor_page::FormError;
//! use decor_types::ErrorCode;
//!
//! let err = FormError::missing_field("footer_html");
//!
//! // Machine-readable code for programmatic handling
//! assert_eq!(err.code(), "FORM_MISSING_FIELD");
//!
//! // The admin can correct the form and resubmit
//! assert!(err.is_recoverable());
//! ```
//!
//! # Crate Structure
//!
//! - [`PageDecorator`] - The decorator capability trait
//! - [`FormData`], [`FormError`] - Admin form submissions
//! - [`Settings`], [`SETTINGS_VERSION`] - Persisted configuration blob
//! - [`AdminRequest`] - Submission context
//! - [`PageContext`], [`PageFragment`] - Render path
//! - [`DecoratorError`] - Lifecycle errors
//! - [`testing`] - DecoratorTestHarness
//!
//! # Related Crates
//!
//! - [`decor_types`] - Core identifier types ([`DecoratorId`], [`ErrorCode`])
//! - `decor-host` - Runtime layer (registry, settings store, PageHost)
//!
//! [`DecoratorId`]: decor_types::DecoratorId
//! [`ErrorCode`]: decor_types::ErrorCode

mod decorator;
mod error;
mod form;
mod page;
mod settings;

pub mod testing;

pub use decorator::{AdminRequest, PageDecorator};
pub use error::DecoratorError;
pub use form::{FormData, FormError};
pub use page::{PageContext, PageFragment};
pub use settings::{Settings, SETTINGS_VERSION};
