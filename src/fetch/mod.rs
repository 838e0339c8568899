//! Document accessor: turns a URL into a [`PageDocument`].
//!
//! The accessor is the only part of an audit that performs I/O. URL
//! validation happens first, so malformed input never reaches the network.

mod extract;
mod options;
mod web;

pub use extract::extract_document;
pub use options::{ExtractOptions, FetchOptions, DEFAULT_USER_AGENT};
pub use web::WebAccessor;

use crate::error::{Error, Result};
use crate::model::PageDocument;
use url::Url;

/// Source of parsed pages.
///
/// Implement this trait to audit pages from somewhere other than the web,
/// e.g. a headless browser or a crawl archive.
pub trait DocumentAccessor: Send + Sync {
    /// Name of this accessor.
    fn name(&self) -> &str;

    /// Fetch and parse the page at `url`.
    fn fetch(&self, url: &Url) -> Result<PageDocument>;
}

/// Validate an audit target.
///
/// Accepts absolute http, https, and file URLs. http and https URLs must
/// name a host.
///
/// # Example
/// ```
/// use a11yscore::fetch::parse_url;
///
/// assert!(parse_url("https://example.com/").is_ok());
/// assert!(parse_url("/relative/path").is_err());
/// assert!(parse_url("mailto:someone@example.com").is_err());
/// ```
pub fn parse_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim())?;
    match url.scheme() {
        "http" | "https" => {
            if url.host_str().map_or(true, str::is_empty) {
                return Err(Error::InvalidUrl(format!("missing host: {}", input)));
            }
            Ok(url)
        }
        "file" => Ok(url),
        other => Err(Error::UnsupportedScheme(other.to_string())),
    }
}

/// Serves the same HTML for every URL.
///
/// Useful for pages that were fetched elsewhere and for tests.
#[derive(Debug, Clone)]
pub struct StaticAccessor {
    html: String,
    options: ExtractOptions,
}

impl StaticAccessor {
    /// Create an accessor for a fixed page.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            options: ExtractOptions::default(),
        }
    }

    /// Set extract options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }
}

impl DocumentAccessor for StaticAccessor {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self, url: &Url) -> Result<PageDocument> {
        extract_document(&self.html, url, &self.options)
    }
}
