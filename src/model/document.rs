//! Document-level types.

use super::{ImageElement, LinkElement, TextBlock};
use serde::{Deserialize, Serialize};

/// A parsed web page, reduced to the elements the evaluators look at.
///
/// Built once per run by a [`crate::fetch::DocumentAccessor`] and only read
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    /// URL the page was fetched from
    pub url: String,

    /// `<img>` elements in document order
    pub images: Vec<ImageElement>,

    /// Text blocks (`<p>`, `<li>`) in document order
    pub text_blocks: Vec<TextBlock>,

    /// `<a>` elements in document order
    pub links: Vec<LinkElement>,
}

impl PageDocument {
    /// Create a new empty document for a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add an image.
    pub fn add_image(&mut self, image: ImageElement) {
        self.images.push(image);
    }

    /// Add a text block.
    pub fn add_text_block(&mut self, block: TextBlock) {
        self.text_blocks.push(block);
    }

    /// Add a link.
    pub fn add_link(&mut self, link: LinkElement) {
        self.links.push(link);
    }

    /// Builder-style variant of [`add_image`](Self::add_image).
    pub fn with_image(mut self, image: ImageElement) -> Self {
        self.add_image(image);
        self
    }

    /// Builder-style variant of [`add_text_block`](Self::add_text_block).
    pub fn with_text_block(mut self, block: TextBlock) -> Self {
        self.add_text_block(block);
        self
    }

    /// Builder-style variant of [`add_link`](Self::add_link).
    pub fn with_link(mut self, link: LinkElement) -> Self {
        self.add_link(link);
        self
    }

    /// Text blocks that contain something other than whitespace.
    pub fn non_empty_text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.text_blocks.iter().filter(|b| !b.is_empty())
    }

    /// Check if the page has no evaluable elements at all.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.links.is_empty() && self.non_empty_text_blocks().count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let doc = PageDocument::new("https://example.com/")
            .with_image(ImageElement::new("a.png").with_alt("Alpha"))
            .with_text_block(TextBlock::new("Some text."))
            .with_text_block(TextBlock::new("   "))
            .with_link(LinkElement::new("Home", "/"));

        assert_eq!(doc.images.len(), 1);
        assert_eq!(doc.text_blocks.len(), 2);
        assert_eq!(doc.non_empty_text_blocks().count(), 1);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = PageDocument::new("https://example.com/").with_text_block(TextBlock::new(""));
        assert!(doc.is_empty());
    }
}
