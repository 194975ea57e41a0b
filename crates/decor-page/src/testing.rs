//! Testing harness for PageDecorator implementations.
//!
//! Provides a test harness for exercising decorators without the full
//! host infrastructure.
//!
//! # Features
//!
//! - Host-independent decorator testing
//! - Init/configure/decorate processing
//! - Configure logging for snapshot testing
//! - Deterministic synchronous execution
//!
//! # Example
//!
//! ```
//! use decor_page::testing::DecoratorTestHarness;
//! use decor_page::{DecoratorError, PageDecorator, Settings};
//! use decor_types::DecoratorId;
//! use serde_json::json;
//!
//! struct EchoDecorator {
//!     id: DecoratorId,
//!     settings: Settings,
//! }
//!
//! impl PageDecorator for EchoDecorator {
//!     fn id(&self) -> &DecoratorId { &self.id }
//!     fn init(&mut self, settings: Option<&Settings>) -> Result<(), DecoratorError> {
//!         self.settings = settings.cloned().unwrap_or_default();
//!         Ok(())
//!     }
//! }
//!
//! let echo = EchoDecorator {
//!     id: DecoratorId::builtin("echo"),
//!     settings: Settings::default(),
//! };
//! let mut harness = DecoratorTestHarness::new(echo);
//!
//! // Startup with no saved state
//! harness.init(None).unwrap();
//!
//! // Submit a form
//! let settings = harness
//!     .configure_fields([("footer_html", json!("<p>hi</p>"))])
//!     .unwrap();
//! assert_eq!(settings.content["footer_html"], "<p>hi</p>");
//! assert_eq!(harness.configure_log().len(), 1);
//! ```

use crate::{
    AdminRequest, DecoratorError, FormData, PageContext, PageDecorator, PageFragment, Settings,
};
use decor_types::DecoratorId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record of a configure call on a decorator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureRecord {
    /// The submitted form, as a JSON object.
    pub form: Value,
    /// Result of the call.
    pub result: ConfigureResult,
}

/// Result of a configure call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ConfigureResult {
    /// Submission accepted; these settings would be persisted.
    Ok(Settings),
    /// Submission rejected with an error message.
    Err(String),
}

/// Test harness for PageDecorator implementations.
///
/// Provides a minimal testing environment for decorators without a
/// registry, store, or host driver.
pub struct DecoratorTestHarness<D: PageDecorator> {
    /// The decorator under test.
    decorator: D,
    /// Log of configure calls.
    configure_log: Vec<ConfigureRecord>,
    /// Request context used by convenience methods.
    request: AdminRequest,
}

impl<D: PageDecorator> DecoratorTestHarness<D> {
    /// Creates a new test harness for the given decorator.
    pub fn new(decorator: D) -> Self {
        Self {
            decorator,
            configure_log: Vec::new(),
            request: AdminRequest::new(),
        }
    }

    /// Sets the request context used by convenience methods.
    pub fn with_request(mut self, request: AdminRequest) -> Self {
        self.request = request;
        self
    }

    /// Returns a reference to the decorator under test.
    pub fn decorator(&self) -> &D {
        &self.decorator
    }

    /// Returns a mutable reference to the decorator under test.
    pub fn decorator_mut(&mut self) -> &mut D {
        &mut self.decorator
    }

    /// Returns the decorator ID.
    pub fn id(&self) -> &DecoratorId {
        self.decorator.id()
    }

    /// Calls `init()` with the given settings.
    ///
    /// # Errors
    ///
    /// Returns the decorator's initialization error if any.
    pub fn init(&mut self, settings: Option<&Settings>) -> Result<(), DecoratorError> {
        self.decorator.init(settings)
    }

    /// Calls `configure()` and logs the result.
    ///
    /// # Errors
    ///
    /// Returns the decorator's form validation error if any.
    pub fn configure(&mut self, form: &FormData) -> Result<Settings, crate::FormError> {
        let request = self.request.clone();
        let result = self.decorator.configure(&request, form);

        self.configure_log.push(ConfigureRecord {
            form: form.to_value(),
            result: match &result {
                Ok(s) => ConfigureResult::Ok(s.clone()),
                Err(e) => ConfigureResult::Err(e.to_string()),
            },
        });

        result
    }

    /// Calls `configure()` with a form built from field pairs.
    ///
    /// Convenience method that builds the form internally.
    ///
    /// # Errors
    ///
    /// Returns the decorator's form validation error if any.
    pub fn configure_fields<I, K>(&mut self, pairs: I) -> Result<Settings, crate::FormError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let form = FormData::from_pairs(pairs);
        self.configure(&form)
    }

    /// Calls `decorate()` for the given page.
    pub fn decorate(&self, page: &PageContext) -> Option<PageFragment> {
        self.decorator.decorate(page)
    }

    /// Calls `decorate()` for a page at the given path.
    pub fn decorate_path(&self, path: &str) -> Option<PageFragment> {
        self.decorator.decorate(&PageContext::new(path))
    }

    /// Returns the configure log for snapshot testing.
    pub fn configure_log(&self) -> &[ConfigureRecord] {
        &self.configure_log
    }

    /// Clears the configure log.
    pub fn clear_logs(&mut self) {
        self.configure_log.clear();
    }
}
