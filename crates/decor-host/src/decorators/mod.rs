//! Builtin decorators shipped with the host.

mod footer;

pub use footer::{FooterDecorator, FooterSettings};
