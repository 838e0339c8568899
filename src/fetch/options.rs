//! Fetch and extraction options.

use std::time::Duration;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; a11yscore/",
    env!("CARGO_PKG_VERSION"),
    "; +https://github.com/iyulab/a11yscore)"
);

/// Options for turning HTML into a [`crate::model::PageDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Text blocks shorter than this many characters are dropped as noise
    pub min_text_chars: usize,

    /// Maximum number of text blocks kept (0 = unlimited)
    pub max_text_blocks: usize,

    /// Skip images whose source is an inline `data:` URI
    pub skip_data_uris: bool,

    /// Resolve `src`/`href` against the page URL
    pub resolve_urls: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum text block length.
    pub fn with_min_text_chars(mut self, chars: usize) -> Self {
        self.min_text_chars = chars;
        self
    }

    /// Set the maximum number of text blocks.
    pub fn with_max_text_blocks(mut self, blocks: usize) -> Self {
        self.max_text_blocks = blocks;
        self
    }

    /// Keep every text block regardless of length or count.
    pub fn all_text(mut self) -> Self {
        self.min_text_chars = 0;
        self.max_text_blocks = 0;
        self
    }

    /// Enable or disable skipping of `data:` images.
    pub fn with_data_uris_skipped(mut self, skip: bool) -> Self {
        self.skip_data_uris = skip;
        self
    }

    /// Enable or disable URL resolution.
    pub fn with_url_resolution(mut self, resolve: bool) -> Self {
        self.resolve_urls = resolve;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_text_chars: 40,
            max_text_blocks: 40,
            skip_data_uris: true,
            resolve_urls: true,
        }
    }
}

/// Options for fetching pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Request timeout
    pub timeout: Duration,

    /// `User-Agent` header sent with requests
    pub user_agent: String,

    /// How fetched HTML is turned into a document
    pub extract: ExtractOptions,
}

impl FetchOptions {
    /// Create new fetch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set extract options.
    pub fn with_extract_options(mut self, extract: ExtractOptions) -> Self {
        self.extract = extract;
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            extract: ExtractOptions::default(),
        }
    }
}
