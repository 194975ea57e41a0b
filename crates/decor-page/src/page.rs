//! Render-path types.
//!
//! On every rendered page, the host asks each decorator for a
//! [`PageFragment`] given the [`PageContext`]. Decorators with nothing
//! to contribute return `None`.

use serde::{Deserialize, Serialize};

/// Context for a single page render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    /// URI path of the page being rendered.
    pub path: String,

    /// Optional page title.
    pub title: Option<String>,
}

impl PageContext {
    /// Creates a context for the given page path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
        }
    }

    /// Sets the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Content a decorator contributes to a rendered page.
///
/// Fragments are injected at the bottom of the page: markup, plus
/// optional stylesheet and script blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFragment {
    /// Footer markup.
    pub html: String,

    /// Optional inline CSS.
    pub css: Option<String>,

    /// Optional inline JavaScript.
    pub js: Option<String>,
}

impl PageFragment {
    /// Creates a fragment from footer markup.
    #[must_use]
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: None,
            js: None,
        }
    }

    /// Attaches inline CSS.
    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Attaches inline JavaScript.
    #[must_use]
    pub fn with_js(mut self, js: impl Into<String>) -> Self {
        self.js = Some(js.into());
        self
    }

    /// Returns `true` if the fragment carries no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_none() && self.js.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_context_builder() {
        let page = PageContext::new("/jobs/build-all").with_title("Build All");
        assert_eq!(page.path, "/jobs/build-all");
        assert_eq!(page.title.as_deref(), Some("Build All"));
    }

    #[test]
    fn fragment_builder() {
        let fragment = PageFragment::html("<p>hi</p>")
            .with_css("p { color: red }")
            .with_js("console.log('hi')");

        assert_eq!(fragment.html, "<p>hi</p>");
        assert!(fragment.css.is_some());
        assert!(fragment.js.is_some());
        assert!(!fragment.is_empty());
    }

    #[test]
    fn fragment_is_empty() {
        assert!(PageFragment::html("").is_empty());
        assert!(!PageFragment::html("").with_css("x").is_empty());
        assert!(!PageFragment::html("<p></p>").is_empty());
    }
}
