//! Accessibility evaluation of a parsed page.
//!
//! Each module (images, text, links) sits behind a capability trait so a
//! trained model can replace the rule-based implementation without touching
//! the aggregator or the report shape.
//!
//! # Example
//!
//! ```
//! use a11yscore::evaluate::Evaluator;
//! use a11yscore::model::{ImageElement, LinkElement, PageDocument};
//!
//! let doc = PageDocument::new("https://example.com/")
//!     .with_image(ImageElement::new("team-photo.jpg").with_alt("The team at the 2024 offsite"))
//!     .with_link(LinkElement::new("Download the annual report", "/report.pdf"));
//!
//! let report = Evaluator::new().report(&doc);
//! assert_eq!(report.overall.as_str(), "Compliant");
//! ```

mod image;
mod link;
mod options;
pub mod score;
mod text;

pub use image::{evaluate_images, ImageClass, ImageIssue, ImageOutcome, RuleImageClassifier};
pub use link::{evaluate_links, normalize_anchor, LinkClass, LinkIssue, RuleLinkClassifier};
pub use options::{
    ImageRules, LinkRules, RatingThresholds, ScoringConfig, ScoringPreset, TextRules,
};
pub use text::{
    evaluate_text, ReadabilityEstimate, ReadabilityTier, RuleReadabilityEstimator,
};

use crate::model::{ComplianceReport, ImageElement, LinkElement, PageDocument, TextBlock};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Decides whether an image needs alternative text and whether it has it.
pub trait ImageClassifier: Send + Sync {
    /// Name of this classifier.
    fn name(&self) -> &str;

    /// Classify one image.
    fn classify(&self, image: &ImageElement) -> ImageClass;
}

/// Estimates readability of a page's text as a whole.
pub trait ReadabilityEstimator: Send + Sync {
    /// Name of this estimator.
    fn name(&self) -> &str;

    /// Estimate readability, `None` when there is no evaluable text.
    fn estimate(&self, blocks: &[TextBlock]) -> Option<ReadabilityEstimate>;
}

/// Decides whether a link's text is descriptive.
pub trait LinkClassifier: Send + Sync {
    /// Name of this classifier.
    fn name(&self) -> &str;

    /// Classify one link.
    fn classify(&self, link: &LinkElement) -> LinkClass;
}

/// Per-item details behind a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Findings {
    /// Informative images that failed
    pub images: Vec<ImageIssue>,

    /// Images treated as decorative
    pub decorative_images: u32,

    /// Links with generic text
    pub links: Vec<LinkIssue>,

    /// Readability estimate, absent when the page has no evaluable text
    pub readability: Option<ReadabilityEstimate>,
}

/// Report plus the findings it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The compliance report
    pub report: ComplianceReport,

    /// Item-level findings
    pub findings: Findings,
}

/// Runs the three evaluators and aggregates their verdicts.
///
/// Stateless across runs and `Send + Sync`, so one evaluator can serve many
/// pages concurrently.
#[derive(Clone)]
pub struct Evaluator {
    images: Arc<dyn ImageClassifier>,
    text: Arc<dyn ReadabilityEstimator>,
    links: Arc<dyn LinkClassifier>,
    thresholds: RatingThresholds,
}

impl Evaluator {
    /// Create an evaluator with the standard rules.
    pub fn new() -> Self {
        Self::from_config(&ScoringConfig::default())
    }

    /// Create rule-based evaluators from a configuration.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            images: Arc::new(RuleImageClassifier::new(config.images.clone())),
            text: Arc::new(RuleReadabilityEstimator::new(config.text.clone())),
            links: Arc::new(RuleLinkClassifier::new(config.links.clone())),
            thresholds: config.thresholds,
        }
    }

    /// Replace the image classifier.
    pub fn with_image_classifier(mut self, classifier: Arc<dyn ImageClassifier>) -> Self {
        self.images = classifier;
        self
    }

    /// Replace the readability estimator.
    pub fn with_readability_estimator(mut self, estimator: Arc<dyn ReadabilityEstimator>) -> Self {
        self.text = estimator;
        self
    }

    /// Replace the link classifier.
    pub fn with_link_classifier(mut self, classifier: Arc<dyn LinkClassifier>) -> Self {
        self.links = classifier;
        self
    }

    /// Replace the rating thresholds.
    pub fn with_thresholds(mut self, thresholds: RatingThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Rating thresholds in use.
    pub fn thresholds(&self) -> &RatingThresholds {
        &self.thresholds
    }

    /// Evaluate a page and keep the findings.
    pub fn evaluate(&self, doc: &PageDocument) -> Evaluation {
        if doc.is_empty() {
            log::warn!("{}: no images, text, or links to evaluate", doc.url);
        }
        let images = evaluate_images(self.images.as_ref(), &doc.images, &self.thresholds);
        let (text, readability) =
            evaluate_text(self.text.as_ref(), &doc.text_blocks, &self.thresholds);
        let (links, link_issues) =
            evaluate_links(self.links.as_ref(), &doc.links, &self.thresholds);

        let overall = score::overall([images.verdict.rating, text.rating, links.rating]);
        log::info!(
            "{}: images={}, text={}, links={}, overall={}",
            doc.url,
            images.verdict.rating,
            text.rating,
            links.rating,
            overall
        );

        Evaluation {
            report: ComplianceReport {
                url: doc.url.clone(),
                images: images.verdict,
                text,
                links,
                overall,
            },
            findings: Findings {
                images: images.issues,
                decorative_images: images.decorative,
                links: link_issues,
                readability,
            },
        }
    }

    /// Evaluate a page, returning only the report.
    pub fn report(&self, doc: &PageDocument) -> ComplianceReport {
        self.evaluate(doc).report
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("images", &self.images.name())
            .field("text", &self.text.name())
            .field("links", &self.links.name())
            .field("thresholds", &self.thresholds)
            .finish()
    }
}
