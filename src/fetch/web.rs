//! Accessor that fetches pages over HTTP(S) or from `file://` URLs.

use super::{extract_document, DocumentAccessor, FetchOptions};
use crate::error::{Error, Result};
use crate::model::PageDocument;
use url::Url;

/// Fetches pages from the network or the local filesystem.
///
/// http and https need the `http` feature (enabled by default).
#[derive(Debug, Clone)]
pub struct WebAccessor {
    options: FetchOptions,
    #[cfg(feature = "http")]
    client: reqwest::blocking::Client,
}

impl WebAccessor {
    /// Create an accessor with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(FetchOptions::default())
    }

    /// Create an accessor with custom options.
    pub fn with_options(options: FetchOptions) -> Result<Self> {
        #[cfg(feature = "http")]
        let client = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()?;

        Ok(Self {
            options,
            #[cfg(feature = "http")]
            client,
        })
    }

    /// Options in use.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Read the raw body behind a URL.
    pub fn fetch_html(&self, url: &Url) -> Result<String> {
        match url.scheme() {
            "file" => self.read_file(url),
            "http" | "https" => self.get(url),
            other => Err(Error::UnsupportedScheme(other.to_string())),
        }
    }

    fn read_file(&self, url: &Url) -> Result<String> {
        let path = url
            .to_file_path()
            .map_err(|_| Error::InvalidUrl(format!("not a local file path: {}", url)))?;
        let bytes = std::fs::read(&path)?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    #[cfg(feature = "http")]
    fn get(&self, url: &Url) -> Result<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url.as_str()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if let Some(content_type) = content_type {
            if !crate::detect::is_html_content_type(&content_type) {
                return Err(Error::Parse(format!(
                    "expected an HTML page, got {}",
                    content_type
                )));
            }
        }

        let body = response.text()?;
        log::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    #[cfg(not(feature = "http"))]
    fn get(&self, url: &Url) -> Result<String> {
        Err(Error::UnsupportedScheme(format!(
            "{} (built without the `http` feature)",
            url.scheme()
        )))
    }
}

impl DocumentAccessor for WebAccessor {
    fn name(&self) -> &str {
        "web"
    }

    fn fetch(&self, url: &Url) -> Result<PageDocument> {
        let html = self.fetch_html(url)?;
        extract_document(&html, url, &self.options.extract)
    }
}
