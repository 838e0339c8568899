//! Link evaluator: descriptive vs. generic anchor text.

use super::{score, LinkClassifier, LinkRules, RatingThresholds};
use crate::model::{LinkElement, ModuleVerdict};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Trailing characters ignored when matching generic phrases ("Read more »").
const TRAILING_ORNAMENTS: &[char] = &['.', '!', '?', ':', '…', '»', '>', '→', '›', ' '];

/// Classification of a link's anchor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkClass {
    /// Text conveys the destination or purpose
    Descriptive,
    /// Boilerplate such as "click here", or empty
    Generic,
}

/// A link whose text is generic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkIssue {
    /// Normalized anchor text
    pub text: String,
    /// Link target
    pub href: String,
}

/// Normalize anchor text: NFC, collapse whitespace, trim, lower-case.
///
/// Idempotent: normalizing a normalized string returns it unchanged.
pub fn normalize_anchor(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .nfc()
        .collect()
}

/// Rule-based link classifier.
#[derive(Debug, Clone)]
pub struct RuleLinkClassifier {
    rules: LinkRules,
    phrases: Vec<String>,
}

impl RuleLinkClassifier {
    /// Create a classifier. Generic phrases are normalized once up front.
    pub fn new(rules: LinkRules) -> Self {
        let phrases = rules
            .generic_phrases
            .iter()
            .map(|p| normalize_anchor(p))
            .collect();
        Self { rules, phrases }
    }

    /// Classify already-normalized text.
    pub fn classify_text(&self, normalized: &str) -> LinkClass {
        let core = normalized.trim_end_matches(TRAILING_ORNAMENTS);
        if core.is_empty() || self.phrases.iter().any(|p| p == core) {
            return LinkClass::Generic;
        }
        if self.rules.min_words > 0 {
            let words = core
                .split_whitespace()
                .filter(|w| w.chars().all(char::is_alphabetic))
                .count();
            if words < self.rules.min_words {
                return LinkClass::Generic;
            }
        }
        LinkClass::Descriptive
    }
}

impl Default for RuleLinkClassifier {
    fn default() -> Self {
        Self::new(LinkRules::default())
    }
}

impl LinkClassifier for RuleLinkClassifier {
    fn name(&self) -> &str {
        "rules"
    }

    fn classify(&self, link: &LinkElement) -> LinkClass {
        self.classify_text(&normalize_anchor(&link.text))
    }
}

/// Evaluate every link; descriptive links pass.
pub fn evaluate_links(
    classifier: &dyn LinkClassifier,
    links: &[LinkElement],
    thresholds: &RatingThresholds,
) -> (ModuleVerdict, Vec<LinkIssue>) {
    let mut issues = Vec::new();
    for link in links {
        if classifier.classify(link) == LinkClass::Generic {
            issues.push(LinkIssue {
                text: normalize_anchor(&link.text),
                href: link.href.clone(),
            });
        }
    }

    let total = links.len() as u32;
    let pass = total - issues.len() as u32;
    log::debug!("Links: {}/{} descriptive", pass, total);

    (score::verdict(pass, total, thresholds), issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;

    fn classify(text: &str) -> LinkClass {
        RuleLinkClassifier::default().classify(&LinkElement::new(text, "/x"))
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_anchor("  Click   Here \n"), "click here");
        assert_eq!(normalize_anchor(""), "");
        assert_eq!(normalize_anchor("Caf\u{0065}\u{0301}"), "caf\u{00e9}");
    }

    #[test]
    fn test_normalize_idempotent() {
        for text in [
            "  Click   Here ",
            "Download the 2024 ANNUAL report",
            "\tÉTÉ\u{00a0}2024",
            "İstanbul guide",
            "",
        ] {
            let once = normalize_anchor(text);
            assert_eq!(normalize_anchor(&once), once, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_generic_phrases() {
        assert_eq!(classify("Click Here"), LinkClass::Generic);
        assert_eq!(classify("READ MORE"), LinkClass::Generic);
        assert_eq!(classify("here"), LinkClass::Generic);
        assert_eq!(classify("Link"), LinkClass::Generic);
        assert_eq!(classify("more"), LinkClass::Generic);
        assert_eq!(classify("this page"), LinkClass::Generic);
        assert_eq!(classify("   "), LinkClass::Generic);
    }

    #[test]
    fn test_trailing_ornaments() {
        assert_eq!(classify("Read more »"), LinkClass::Generic);
        assert_eq!(classify("Click here!"), LinkClass::Generic);
        assert_eq!(classify("More…"), LinkClass::Generic);
        assert_eq!(classify("»"), LinkClass::Generic);
    }

    #[test]
    fn test_descriptive() {
        assert_eq!(classify("Download the 2024 annual report"), LinkClass::Descriptive);
        assert_eq!(classify("Read more about pricing"), LinkClass::Descriptive);
        assert_eq!(classify("Pricing"), LinkClass::Descriptive);
        assert_eq!(classify("Contact"), LinkClass::Descriptive);
    }

    #[test]
    fn test_min_words() {
        let classifier = RuleLinkClassifier::new(LinkRules {
            min_words: 2,
            ..LinkRules::default()
        });
        assert_eq!(classifier.classify_text("pricing"), LinkClass::Generic);
        assert_eq!(classifier.classify_text("2024"), LinkClass::Generic);
        assert_eq!(classifier.classify_text("pricing plans"), LinkClass::Descriptive);
    }

    #[test]
    fn test_evaluate_links() {
        let links = vec![
            LinkElement::new("Click Here", "https://example.com/a"),
            LinkElement::new("Download the 2024 annual report", "https://example.com/r.pdf"),
        ];
        let (verdict, issues) = evaluate_links(
            &RuleLinkClassifier::default(),
            &links,
            &RatingThresholds::default(),
        );
        assert_eq!((verdict.pass, verdict.total), (1, 2));
        assert_eq!(verdict.rating, Rating::Partial);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "click here");
        assert_eq!(issues[0].href, "https://example.com/a");
    }

    #[test]
    fn test_evaluate_no_links() {
        let (verdict, issues) = evaluate_links(
            &RuleLinkClassifier::default(),
            &[],
            &RatingThresholds::default(),
        );
        assert_eq!(verdict.rating, Rating::InsufficientData);
        assert!(issues.is_empty());
    }
}
