//! Host runtime for Decor.
//!
//! This crate is the **Runtime** layer: it owns the decorator registry,
//! the settings store, and the [`PageHost`] that drives decorator
//! lifecycle and page assembly.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Runtime Layer                          │
//! │  (Internal, host-side)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  decor-host  : PageHost, registry, stores, config  ◄── HERE │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    Decorator SDK Layer                       │
//! │  decor-page  : PageDecorator trait, FormData                 │
//! │  decor-types : DecoratorId, ErrorCode                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use decor_host::{FooterDecorator, MemoryStore, PageHost};
//! use decor_page::{AdminRequest, FormData, PageContext};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Explicit registration: the host decides what runs
//! let mut host = PageHost::new(MemoryStore::new());
//! host.register(Box::new(FooterDecorator::ciborg()))?;
//! host.register(Box::new(FooterDecorator::lobot()))?;
//!
//! // Load persisted settings into live state
//! host.startup().await?;
//!
//! // Route an admin submission
//! let form = FormData::from_pairs([("footer_html", json!("<p>hi</p>"))]);
//! host.submit_configuration("builtin::ciborg", &AdminRequest::new(), &form)
//!     .await?;
//!
//! // Render
//! let fragments = host.decorate(&PageContext::new("/"));
//! assert_eq!(fragments.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Structure
//!
//! - [`PageHost`] - Lifecycle driver (startup, submissions, render)
//! - [`DecoratorRegistry`] - Explicit registration, ordered dispatch
//! - [`SettingsStore`], [`LocalFileStore`], [`MemoryStore`] - Persistence
//! - [`config`] - Layered TOML configuration
//! - [`FooterDecorator`] - Builtin `ciborg` / `lobot` decorators
//! - [`HostError`], [`StorageError`] - Error taxonomy
//!
//! # Related Crates
//!
//! - [`decor_page`] - Decorator SDK ([`PageDecorator`])
//! - [`decor_types`] - Core identifier types
//!
//! [`PageDecorator`]: decor_page::PageDecorator

pub mod config;

mod decorators;
mod error;
mod host;
mod registry;
mod store;

pub use config::{ConfigLoader, HostConfig};
pub use decorators::{FooterDecorator, FooterSettings};
pub use error::HostError;
pub use host::PageHost;
pub use registry::DecoratorRegistry;
pub use store::{
    default_settings_path, LocalFileStore, MemoryStore, SettingsMeta, SettingsRecord,
    SettingsStore, StorageError,
};
