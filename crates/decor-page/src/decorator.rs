//! PageDecorator trait for host-driven page extensions.
//!
//! Decorators are the functional units the host consults at page render
//! time. Each carries its own persisted configuration, loaded at startup
//! and replaced on admin form submission.
//!
//! # Lifecycle
//!
//! ```text
//! Host startup
//!     │ load persisted settings (or None)
//!     ▼
//! ┌─────────────────┐
//! │  init(settings) │   live state = saved state (or defaults)
//! └─────────────────┘
//!     │
//!     │ admin submits configuration form
//!     │ host persists the form (exactly one write per submission)
//!     ▼
//! ┌──────────────────────────┐
//! │  configure(request, form)│   validate, produce Settings
//! └──────────────────────────┘
//!     │ accepted
//!     ▼
//! ┌─────────────────┐
//! │  init(settings) │   live state = new settings
//! └─────────────────┘
//!     │
//!     │ every page render
//!     ▼
//! ┌─────────────────┐
//! │  decorate(page) │   contribute a fragment (or nothing)
//! └─────────────────┘
//! ```
//!
//! # Persistence Contract
//!
//! Decorators never touch storage. The host owns persistence: it writes
//! the submitted form once per submission, before calling `configure`,
//! then re-applies the accepted settings via `init`. A decorator that
//! rejects a submission returns [`FormError`]; the rejection surfaces
//! to the admin, live state stays put, and the host discards the
//! already-written blob at the next startup if it cannot be applied.
//!
//! # Example
//!
//! ```
//! use decor_page::{AdminRequest, DecoratorError, FormData, FormError,
//!                  PageContext, PageDecorator, PageFragment, Settings};
//! use decor_types::DecoratorId;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct BannerSettings {
//!     text: String,
//! }
//!
//! struct BannerDecorator {
//!     id: DecoratorId,
//!     settings: BannerSettings,
//! }
//!
//! impl PageDecorator for BannerDecorator {
//!     fn id(&self) -> &DecoratorId {
//!         &self.id
//!     }
//!
//!     fn init(&mut self, settings: Option<&Settings>) -> Result<(), DecoratorError> {
//!         self.settings = match settings {
//!             Some(s) => s.to_content()?,
//!             None => BannerSettings::default(),
//!         };
//!         Ok(())
//!     }
//!
//!     fn decorate(&self, _page: &PageContext) -> Option<PageFragment> {
//!         if self.settings.text.is_empty() {
//!             None
//!         } else {
//!             Some(PageFragment::html(self.settings.text.clone()))
//!         }
//!     }
//! }
//! ```

use crate::{DecoratorError, FormData, FormError, PageContext, PageFragment, Settings};
use decor_types::DecoratorId;

/// Context of an administrative form submission.
///
/// Opaque to decorators that don't care; available for audit logging
/// and per-submitter validation in those that do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminRequest {
    /// Identity of the submitting administrator, when known.
    pub submitted_by: Option<String>,

    /// URI path of the form that produced the submission.
    pub form_path: Option<String>,
}

impl AdminRequest {
    /// Creates an anonymous request context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the submitting administrator.
    #[must_use]
    pub fn with_submitted_by(mut self, who: impl Into<String>) -> Self {
        self.submitted_by = Some(who.into());
        self
    }

    /// Sets the originating form path.
    #[must_use]
    pub fn with_form_path(mut self, path: impl Into<String>) -> Self {
        self.form_path = Some(path.into());
        self
    }
}

/// Trait for host-driven page decorators.
///
/// # Required Methods
///
/// | Method | Purpose |
/// |--------|---------|
/// | `id` | Decorator identification (persistence key) |
/// | `init` | Apply persisted settings to live state |
///
/// # Provided Methods
///
/// | Method | Default |
/// |--------|---------|
/// | `configure` | Accept the whole form as settings |
/// | `decorate` | Contribute nothing |
///
/// # Thread Safety
///
/// Decorators must be `Send + Sync`; the host may be shared across
/// async tasks.
pub trait PageDecorator: Send + Sync {
    /// Returns the decorator's identifier.
    ///
    /// Used for:
    /// - Settings persistence keying
    /// - Registry lookup
    /// - Logging
    fn id(&self) -> &DecoratorId;

    /// Applies persisted settings to live state.
    ///
    /// Called once at host startup with the loaded settings, and again
    /// after each accepted configuration with the fresh settings.
    ///
    /// # Arguments
    ///
    /// * `settings` - The persisted settings, or `None` when no prior
    ///   saved state exists (the decorator starts from defaults)
    ///
    /// # Errors
    ///
    /// Return `Err` if the settings cannot be applied, typically
    /// [`DecoratorError::Settings`] when the blob does not decode.
    fn init(&mut self, settings: Option<&Settings>) -> Result<(), DecoratorError>;

    /// Validates an admin submission and produces the settings to apply.
    ///
    /// The host persists the submitted form before calling this method
    /// and re-applies the returned settings via [`init`](Self::init).
    /// Returning [`FormError`] rejects the submission; live state is
    /// not touched.
    ///
    /// # Default
    ///
    /// Accepts the whole form as the new settings content, the base
    /// behavior shared by decorators without field-level validation.
    fn configure(
        &mut self,
        request: &AdminRequest,
        form: &FormData,
    ) -> Result<Settings, FormError> {
        let _ = request;
        Ok(Settings::from_value(form.to_value()))
    }

    /// Contributes content to a rendered page.
    ///
    /// Called on every page render. Return `None` to contribute nothing
    /// (disabled, unconfigured, or not applicable to this page).
    ///
    /// # Default
    ///
    /// Returns `None` - decorator contributes nothing.
    fn decorate(&self, page: &PageContext) -> Option<PageFragment> {
        let _ = page;
        None
    }
}
