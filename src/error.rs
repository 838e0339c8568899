//! Error types for a11yscore library.

use std::io;
use thiserror::Error;

/// Result type alias for a11yscore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching and auditing a page.
///
/// Scoring itself never fails: once a [`crate::model::PageDocument`] exists,
/// every evaluator returns a plain value. Errors only come from the input
/// boundary, the document accessor, configuration, and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a syntactically valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL scheme cannot be fetched.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Network failure while fetching the page.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("Fetch failed: HTTP {status} for {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The fetched body could not be structured as an HTML document.
    #[error("HTML parsing error: {0}")]
    Parse(String),

    /// I/O error when reading local pages or configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid scoring configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error during report rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Malformed input, rejected before any I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidUrl(_) | Error::UnsupportedScheme(_))
    }

    /// Network failure or non-2xx response.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Error::Fetch(_) | Error::HttpStatus { .. } | Error::Io(_))
    }

    /// The page was fetched but is not usable markup.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => Error::Fetch(err.to_string()),
        }
    }
}
