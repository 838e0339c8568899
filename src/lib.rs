//! # a11yscore
//!
//! Heuristic web accessibility scoring for Rust.
//!
//! This library fetches a web page, checks its images, text, and links
//! against simple accessibility rules, and produces a compliance report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use a11yscore::{audit_url, render};
//!
//! fn main() -> a11yscore::Result<()> {
//!     // Fetch and score a page
//!     let report = audit_url("https://example.com/")?;
//!
//!     // Print the JSON report
//!     let json = render::to_json(&report, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Images**: missing and placeholder alt text, decorative images excluded
//! - **Text**: readability estimate over the page's paragraphs
//! - **Links**: generic anchors such as "click here" or "read more"
//! - **Pluggable classifiers**: swap any rule set for a trained model
//! - **Batch audits**: many URLs in parallel with Rayon

pub mod batch;
pub mod detect;
pub mod error;
pub mod evaluate;
pub mod fetch;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use batch::{audit_batch, BatchEntry, BatchOptions};
pub use error::{Error, Result};
pub use evaluate::{
    Evaluation, Evaluator, ImageClassifier, LinkClassifier, ReadabilityEstimator, ScoringConfig,
    ScoringPreset,
};
pub use fetch::{parse_url, DocumentAccessor, ExtractOptions, FetchOptions, WebAccessor};
pub use model::{
    ComplianceReport, ImageElement, LinkElement, ModuleVerdict, OverallRating, PageDocument,
    Rating, TextBlock,
};
pub use render::JsonFormat;

use fetch::extract_document;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Fetch a page and score it with the standard rules.
///
/// # Example
///
/// ```no_run
/// use a11yscore::audit_url;
///
/// let report = audit_url("https://example.com/").unwrap();
/// println!("Overall: {}", report.overall);
/// ```
pub fn audit_url(url: &str) -> Result<ComplianceReport> {
    Auditor::new().audit(url)
}

/// Score HTML that was fetched elsewhere.
///
/// `url` is reported as-is and used to resolve relative links.
///
/// # Example
///
/// ```
/// use a11yscore::{audit_html, Rating};
///
/// let html = r#"<img src="/logo.png" alt="Acme logo"><a href="/docs">Read the docs</a>"#;
/// let report = audit_html(html, "https://example.com/").unwrap();
/// assert_eq!(report.images.rating, Rating::Compliant);
/// assert_eq!(report.links.rating, Rating::Compliant);
/// ```
pub fn audit_html(html: &str, url: &str) -> Result<ComplianceReport> {
    Auditor::new().audit_html(html, url)
}

/// Builder for fetching and scoring pages.
///
/// The default accessor fetches over HTTP(S) and from `file://` URLs. It is
/// created on first use and shared by every later audit, including the
/// workers of a batch.
///
/// # Example
///
/// ```no_run
/// use a11yscore::{Auditor, FetchOptions, ScoringPreset};
/// use std::time::Duration;
///
/// let report = Auditor::new()
///     .with_preset(ScoringPreset::Strict)
///     .with_fetch_options(FetchOptions::new().with_timeout(Duration::from_secs(5)))
///     .audit("https://example.com/")?;
/// # Ok::<(), a11yscore::Error>(())
/// ```
#[derive(Clone)]
pub struct Auditor {
    evaluator: Evaluator,
    fetch_options: FetchOptions,
    accessor: Option<Arc<dyn DocumentAccessor>>,
    web: OnceLock<Arc<dyn DocumentAccessor>>,
}

impl Auditor {
    /// Create an auditor with the standard rules and default fetch options.
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
            fetch_options: FetchOptions::default(),
            accessor: None,
            web: OnceLock::new(),
        }
    }

    /// Score with rules from a configuration.
    pub fn with_config(mut self, config: &ScoringConfig) -> Self {
        self.evaluator = Evaluator::from_config(config);
        self
    }

    /// Score with a built-in rule preset.
    pub fn with_preset(self, preset: ScoringPreset) -> Self {
        self.with_config(&ScoringConfig::from_preset(preset))
    }

    /// Use a custom evaluator, e.g. one with model-backed classifiers.
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Set options for the default web accessor.
    pub fn with_fetch_options(mut self, options: FetchOptions) -> Self {
        self.fetch_options = options;
        self.web = OnceLock::new();
        self
    }

    /// Fetch pages through a custom accessor.
    pub fn with_accessor(mut self, accessor: Arc<dyn DocumentAccessor>) -> Self {
        self.accessor = Some(accessor);
        self
    }

    /// Evaluator in use.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Fetch options for the default web accessor.
    pub fn fetch_options(&self) -> &FetchOptions {
        &self.fetch_options
    }

    /// Fetch and score a page.
    ///
    /// The URL is validated before any I/O; on error no report is produced.
    pub fn audit(&self, url: &str) -> Result<ComplianceReport> {
        Ok(self.audit_detailed(url)?.report)
    }

    /// Fetch and score a page, keeping the per-element findings.
    ///
    /// The report carries `url` as given (trimmed), not its normalized form.
    pub fn audit_detailed(&self, url: &str) -> Result<Evaluation> {
        let input = url.trim();
        let url = parse_url(input)?;
        let accessor = self.accessor()?;
        log::debug!("Fetching {} via {} accessor", url, accessor.name());

        let mut doc = accessor.fetch(&url)?;
        doc.url = input.to_string();
        Ok(self.evaluator.evaluate(&doc))
    }

    /// Score HTML that was fetched elsewhere.
    pub fn audit_html(&self, html: &str, url: &str) -> Result<ComplianceReport> {
        Ok(self.audit_html_detailed(html, url)?.report)
    }

    /// Score HTML that was fetched elsewhere, keeping the findings.
    pub fn audit_html_detailed(&self, html: &str, url: &str) -> Result<Evaluation> {
        let input = url.trim();
        let url = parse_url(input)?;
        let mut doc = extract_document(html, &url, &self.fetch_options.extract)?;
        doc.url = input.to_string();
        Ok(self.evaluator.evaluate(&doc))
    }

    fn accessor(&self) -> Result<Arc<dyn DocumentAccessor>> {
        if let Some(accessor) = &self.accessor {
            return Ok(Arc::clone(accessor));
        }
        if let Some(web) = self.web.get() {
            return Ok(Arc::clone(web));
        }
        let web: Arc<dyn DocumentAccessor> =
            Arc::new(WebAccessor::with_options(self.fetch_options.clone())?);
        Ok(Arc::clone(self.web.get_or_init(|| web)))
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Auditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auditor")
            .field("evaluator", &self.evaluator)
            .field("fetch_options", &self.fetch_options)
            .field("accessor", &self.accessor.as_ref().map(|a| a.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticAccessor;

    const PAGE: &str = r#"<html><body>
        <img src="/img/team-photo.jpg" alt="">
        <img src="/img/chart.png" alt="Revenue grew 20% in 2023">
        <a href="/contact">Click here</a>
        <a href="/pricing">See pricing plans</a>
    </body></html>"#;

    #[test]
    fn test_audit_html() {
        let report = audit_html(PAGE, "https://example.com/").unwrap();
        assert_eq!(report.url, "https://example.com/");
        assert_eq!((report.images.pass, report.images.total), (1, 2));
        assert_eq!(report.images.rating, Rating::Partial);
        assert_eq!((report.links.pass, report.links.total), (1, 2));
        assert_eq!(report.text.rating, Rating::InsufficientData);
        assert_eq!(report.overall, OverallRating::PartiallyCompliant);
    }

    #[test]
    fn test_audit_rejects_bad_url_before_fetch() {
        let auditor = Auditor::new().with_accessor(Arc::new(StaticAccessor::new(PAGE)));
        let err = auditor.audit("example.com/no-scheme").unwrap_err();
        assert!(err.is_input_error());
        assert!(auditor.audit("ftp://example.com/").unwrap_err().is_input_error());
    }

    #[test]
    fn test_audit_through_accessor() {
        let auditor = Auditor::new().with_accessor(Arc::new(StaticAccessor::new(PAGE)));
        let evaluation = auditor.audit_detailed("https://example.com/page").unwrap();
        assert_eq!(evaluation.report.url, "https://example.com/page");
        assert_eq!(evaluation.findings.links.len(), 1);
        assert_eq!(evaluation.findings.links[0].href, "https://example.com/contact");
    }

    #[test]
    fn test_report_keeps_url_as_given() {
        let report = audit_html(PAGE, " https://Example.com ").unwrap();
        assert_eq!(report.url, "https://Example.com");
        // Relative links still resolve against the normalized URL.
        let evaluation = Auditor::new()
            .audit_html_detailed(PAGE, "https://Example.com")
            .unwrap();
        assert_eq!(evaluation.findings.links[0].href, "https://example.com/contact");
    }

    #[test]
    fn test_strict_preset_changes_verdict() {
        let html = r#"<a href="/a">Docs</a><a href="/b">Support</a>"#;
        let standard = Auditor::new().audit_html(html, "https://example.com/").unwrap();
        let strict = Auditor::new()
            .with_preset(ScoringPreset::Strict)
            .audit_html(html, "https://example.com/")
            .unwrap();

        assert_eq!(standard.links.rating, Rating::Compliant);
        assert_eq!(strict.links.rating, Rating::NonCompliant);
    }

    #[test]
    fn test_empty_page_is_insufficient() {
        let report = audit_html("<html><body></body></html>", "https://example.com/").unwrap();
        assert_eq!(report.images.rating, Rating::InsufficientData);
        assert_eq!(report.text.rating, Rating::InsufficientData);
        assert_eq!(report.links.rating, Rating::InsufficientData);
        assert_eq!(report.overall, OverallRating::Compliant);
    }

    #[test]
    fn test_auditor_debug() {
        let auditor = Auditor::new().with_accessor(Arc::new(StaticAccessor::new("")));
        let debug = format!("{:?}", auditor);
        assert!(debug.contains("static"));
    }
}
