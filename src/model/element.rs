//! Page element types: images, text blocks, and links.

use serde::{Deserialize, Serialize};

/// An `<img>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Image source (resolved against the page URL when possible)
    pub src: String,

    /// Value of the `alt` attribute; `None` when the attribute is missing
    pub alt: Option<String>,

    /// Lower-cased `role` attribute, empty when absent
    #[serde(default)]
    pub role: String,

    /// Whether the image carries `aria-hidden="true"`
    #[serde(default)]
    pub aria_hidden: bool,
}

impl ImageElement {
    /// Create an image without an `alt` attribute.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    /// Set the `alt` attribute.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Set the `role` attribute.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into().trim().to_lowercase();
        self
    }

    /// Mark the image as hidden from assistive technology.
    pub fn hidden(mut self) -> Self {
        self.aria_hidden = true;
        self
    }

    /// Trimmed alternative text, empty when missing.
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().map(str::trim).unwrap_or("")
    }

    /// Alternative text is present iff it is non-empty after trimming.
    pub fn has_alt(&self) -> bool {
        !self.alt_text().is_empty()
    }

    /// Last path segment of `src`, without query or fragment.
    pub fn file_name(&self) -> &str {
        let path = self.src_path();
        path.rsplit('/').next().unwrap_or(path)
    }

    /// `src` without query string or fragment.
    pub fn src_path(&self) -> &str {
        let end = self.src.find(['?', '#']).unwrap_or(self.src.len());
        &self.src[..end]
    }
}

/// A block of page text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Raw text content
    pub text: String,
}

impl TextBlock {
    /// Create a text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// A block is empty when it holds only whitespace.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An `<a>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkElement {
    /// Visible anchor text (or its accessible-name fallback)
    pub text: String,

    /// Link target; not used for scoring
    pub href: String,
}

impl LinkElement {
    /// Create a link.
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}
