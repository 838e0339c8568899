//! Image evaluator: which images need alternative text, and whether they have it.

use super::{score, ImageClassifier, ImageRules, RatingThresholds};
use crate::model::{ImageElement, ModuleVerdict};
use serde::{Deserialize, Serialize};

/// File extensions that make an alt value look like a file name.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp"];

/// Classification of a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageClass {
    /// Conveys no information; alt text not required
    Decorative,
    /// Informative with usable alt text
    Described,
    /// Informative with empty or missing alt text
    MissingAlt,
    /// Informative with alt text that says nothing (file name, "image", ...)
    PlaceholderAlt,
}

impl ImageClass {
    /// Whether the image needs alternative text.
    pub fn is_informative(&self) -> bool {
        !matches!(self, ImageClass::Decorative)
    }

    /// Decorative images always pass.
    pub fn passes(&self) -> bool {
        matches!(self, ImageClass::Decorative | ImageClass::Described)
    }
}

/// An informative image that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIssue {
    /// Image source
    pub src: String,
    /// Why it failed
    pub reason: ImageClass,
}

/// Result of evaluating all images of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOutcome {
    /// Counts over informative images only
    pub verdict: ModuleVerdict,
    /// Images classified as decorative
    pub decorative: u32,
    /// Failing images in document order
    pub issues: Vec<ImageIssue>,
}

/// Rule-based image classifier.
#[derive(Debug, Clone, Default)]
pub struct RuleImageClassifier {
    rules: ImageRules,
}

impl RuleImageClassifier {
    /// Create a classifier.
    pub fn new(rules: ImageRules) -> Self {
        Self { rules }
    }

    /// No alt text, plus a corroborating hint: presentational role,
    /// `aria-hidden`, or a decorative-looking file name.
    pub fn is_decorative(&self, image: &ImageElement) -> bool {
        if image.has_alt() {
            return false;
        }
        if image.aria_hidden || self.rules.presentational_roles.iter().any(|r| *r == image.role) {
            return true;
        }
        // Host and directories say nothing about the image itself.
        let file_name = image.file_name().to_lowercase();
        self.rules
            .decorative_patterns
            .iter()
            .any(|p| !p.is_empty() && file_name.contains(&p.to_lowercase()))
    }

    /// Alt text that is present but useless.
    pub fn is_placeholder(&self, image: &ImageElement) -> bool {
        let alt = image.alt_text().to_lowercase();
        if alt.chars().count() < self.rules.min_alt_chars {
            return true;
        }
        if self.rules.placeholder_alts.iter().any(|p| p.eq_ignore_ascii_case(&alt)) {
            return true;
        }

        let file_name = image.file_name().to_lowercase();
        if !file_name.is_empty() {
            let stem = file_name
                .rsplit_once('.')
                .map(|(stem, _)| stem)
                .unwrap_or(&file_name);
            if alt == file_name || alt == stem {
                return true;
            }
        }

        IMAGE_EXTENSIONS.iter().any(|ext| alt.ends_with(ext))
    }
}

impl ImageClassifier for RuleImageClassifier {
    fn name(&self) -> &str {
        "rules"
    }

    fn classify(&self, image: &ImageElement) -> ImageClass {
        if self.is_decorative(image) {
            ImageClass::Decorative
        } else if !image.has_alt() {
            ImageClass::MissingAlt
        } else if self.is_placeholder(image) {
            ImageClass::PlaceholderAlt
        } else {
            ImageClass::Described
        }
    }
}

/// Evaluate every image and rate the module over informative images.
pub fn evaluate_images(
    classifier: &dyn ImageClassifier,
    images: &[ImageElement],
    thresholds: &RatingThresholds,
) -> ImageOutcome {
    let mut decorative = 0u32;
    let mut informative = 0u32;
    let mut passed = 0u32;
    let mut issues = Vec::new();

    for image in images {
        let class = classifier.classify(image);
        if !class.is_informative() {
            decorative += 1;
            continue;
        }
        informative += 1;
        if class.passes() {
            passed += 1;
        } else {
            issues.push(ImageIssue {
                src: image.src.clone(),
                reason: class,
            });
        }
    }

    log::debug!(
        "Images: {} decorative, {}/{} informative passed",
        decorative,
        passed,
        informative
    );

    ImageOutcome {
        verdict: score::verdict(passed, informative, thresholds),
        decorative,
        issues,
    }
}
