//! Footer decorator — injects configurable markup at the bottom of
//! every page.
//!
//! Two builtin instances ship with the host, `ciborg` and `lobot`.
//! They share this implementation but carry fully independent persisted
//! state: submitting to one never touches the other's settings.

use decor_page::{
    AdminRequest, DecoratorError, FormData, FormError, PageContext, PageDecorator, PageFragment,
    Settings,
};
use decor_types::DecoratorId;
use serde::{Deserialize, Serialize};

/// Settings schema for [`FooterDecorator`].
///
/// Unknown fields in the persisted blob are ignored, so older records
/// keep decoding after schema additions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FooterSettings {
    /// Markup injected at the bottom of each page.
    pub footer_html: String,

    /// Optional inline CSS shipped with the footer.
    pub footer_css: Option<String>,

    /// Optional inline JavaScript shipped with the footer.
    pub include_js: Option<String>,

    /// When `false`, the decorator contributes nothing.
    pub enabled: bool,
}

impl Default for FooterSettings {
    fn default() -> Self {
        Self {
            footer_html: String::new(),
            footer_css: None,
            include_js: None,
            enabled: true,
        }
    }
}

/// Footer decorator.
///
/// # Example
///
/// ```
/// use decor_host::FooterDecorator;
/// use decor_page::{AdminRequest, FormData, PageContext, PageDecorator};
/// use serde_json::json;
///
/// let mut ciborg = FooterDecorator::ciborg();
/// ciborg.init(None).unwrap();
///
/// // Unconfigured: contributes nothing
/// assert!(ciborg.decorate(&PageContext::new("/")).is_none());
///
/// // Configure and re-apply
/// let form = FormData::from_pairs([("footer_html", json!("<p>hi</p>"))]);
/// let settings = ciborg.configure(&AdminRequest::new(), &form).unwrap();
/// ciborg.init(Some(&settings)).unwrap();
///
/// let fragment = ciborg.decorate(&PageContext::new("/")).unwrap();
/// assert_eq!(fragment.html, "<p>hi</p>");
/// ```
pub struct FooterDecorator {
    id: DecoratorId,
    settings: FooterSettings,
}

impl FooterDecorator {
    /// Creates a footer decorator with the given builtin name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: DecoratorId::builtin(name),
            settings: FooterSettings::default(),
        }
    }

    /// The `ciborg` builtin instance.
    #[must_use]
    pub fn ciborg() -> Self {
        Self::new("ciborg")
    }

    /// The `lobot` builtin instance.
    #[must_use]
    pub fn lobot() -> Self {
        Self::new("lobot")
    }

    /// Looks up a builtin instance by name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "ciborg" => Some(Self::ciborg()),
            "lobot" => Some(Self::lobot()),
            _ => None,
        }
    }

    /// Returns the current live settings.
    #[must_use]
    pub fn settings(&self) -> &FooterSettings {
        &self.settings
    }
}

impl PageDecorator for FooterDecorator {
    fn id(&self) -> &DecoratorId {
        &self.id
    }

    fn init(&mut self, settings: Option<&Settings>) -> Result<(), DecoratorError> {
        self.settings = match settings {
            Some(s) => s.to_content()?,
            None => FooterSettings::default(),
        };
        tracing::debug!(
            decorator = %self.id.fqn(),
            enabled = self.settings.enabled,
            "footer settings applied"
        );
        Ok(())
    }

    fn configure(
        &mut self,
        _request: &AdminRequest,
        form: &FormData,
    ) -> Result<Settings, FormError> {
        // Typed decode validates field types and normalizes the
        // persisted blob to the full schema.
        let parsed: FooterSettings = form.decode()?;
        let value = serde_json::to_value(&parsed)?;
        Ok(Settings::from_value(value))
    }

    fn decorate(&self, _page: &PageContext) -> Option<PageFragment> {
        if !self.settings.enabled || self.settings.footer_html.is_empty() {
            return None;
        }

        let mut fragment = PageFragment::html(self.settings.footer_html.clone());
        if let Some(css) = &self.settings.footer_css {
            fragment = fragment.with_css(css.clone());
        }
        if let Some(js) = &self.settings.include_js {
            fragment = fragment.with_js(js.clone());
        }
        Some(fragment)
    }
}
