//! Text evaluator: document-level readability estimate.

use super::{score, RatingThresholds, ReadabilityEstimator, TextRules};
use crate::model::{ModuleVerdict, TextBlock};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Readability tier, ascending in difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityTier {
    /// Short sentences, short words
    Easy,
    /// Between the two thresholds
    Medium,
    /// Long sentences or long words
    Difficult,
}

impl ReadabilityTier {
    /// Easy and medium text passes.
    pub fn passes(&self) -> bool {
        !matches!(self, ReadabilityTier::Difficult)
    }
}

/// Readability estimate over all non-empty text blocks of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityEstimate {
    /// Words counted across all blocks
    pub words: u32,

    /// Sentences containing at least one word
    pub sentences: u32,

    /// Average words per sentence
    pub words_per_sentence: f64,

    /// Average characters per word
    pub chars_per_word: f64,

    /// Weighted composite score
    pub score: f64,

    /// Tier the score falls in
    pub tier: ReadabilityTier,
}

/// Rule-based readability from sentence and word length.
#[derive(Debug, Clone)]
pub struct RuleReadabilityEstimator {
    rules: TextRules,
    word_regex: Regex,
    sentence_regex: Regex,
}

impl RuleReadabilityEstimator {
    /// Create an estimator.
    pub fn new(rules: TextRules) -> Self {
        Self {
            rules,
            word_regex: Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿ']+").expect("valid word regex"),
            sentence_regex: Regex::new(r"[.!?]+").expect("valid sentence regex"),
        }
    }

    /// Map a composite score to a tier.
    pub fn tier(&self, score: f64) -> ReadabilityTier {
        if score <= self.rules.easy_max {
            ReadabilityTier::Easy
        } else if score <= self.rules.medium_max {
            ReadabilityTier::Medium
        } else {
            ReadabilityTier::Difficult
        }
    }

    /// Count (words, sentences, word characters) in one block.
    fn count(&self, text: &str) -> (u32, u32, u32) {
        let mut words = 0;
        let mut sentences = 0;
        let mut chars = 0;
        for sentence in self.sentence_regex.split(text) {
            let mut in_sentence = 0;
            for word in self.word_regex.find_iter(sentence) {
                in_sentence += 1;
                chars += word.as_str().chars().count() as u32;
            }
            if in_sentence > 0 {
                sentences += 1;
                words += in_sentence;
            }
        }
        (words, sentences, chars)
    }
}

impl Default for RuleReadabilityEstimator {
    fn default() -> Self {
        Self::new(TextRules::default())
    }
}

impl ReadabilityEstimator for RuleReadabilityEstimator {
    fn name(&self) -> &str {
        "rules"
    }

    fn estimate(&self, blocks: &[TextBlock]) -> Option<ReadabilityEstimate> {
        let (words, sentences, chars) = blocks
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| self.count(&b.text))
            .fold((0u32, 0u32, 0u32), |acc, c| {
                (acc.0 + c.0, acc.1 + c.1, acc.2 + c.2)
            });

        // A block without words is as good as empty.
        if words == 0 || sentences == 0 {
            return None;
        }

        let words_per_sentence = f64::from(words) / f64::from(sentences);
        let chars_per_word = f64::from(chars) / f64::from(words);
        let score = words_per_sentence * self.rules.sentence_weight
            + chars_per_word * self.rules.word_weight;

        Some(ReadabilityEstimate {
            words,
            sentences,
            words_per_sentence,
            chars_per_word,
            score,
            tier: self.tier(score),
        })
    }
}

/// Evaluate page text as a whole.
///
/// The module has a single item, the page: it passes when the estimate is
/// easy or medium. No evaluable text yields insufficient data.
pub fn evaluate_text(
    estimator: &dyn ReadabilityEstimator,
    blocks: &[TextBlock],
    thresholds: &RatingThresholds,
) -> (ModuleVerdict, Option<ReadabilityEstimate>) {
    match estimator.estimate(blocks) {
        Some(estimate) => {
            let pass = u32::from(estimate.tier.passes());
            log::debug!(
                "Readability: {:.1} words/sentence, {:.2} chars/word, score {:.1} ({:?})",
                estimate.words_per_sentence,
                estimate.chars_per_word,
                estimate.score,
                estimate.tier
            );
            (score::verdict(pass, 1, thresholds), Some(estimate))
        }
        None => {
            log::debug!("Readability: no evaluable text");
            (ModuleVerdict::insufficient(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;

    fn blocks(texts: &[&str]) -> Vec<TextBlock> {
        texts.iter().map(|t| TextBlock::new(*t)).collect()
    }

    #[test]
    fn test_easy_text() {
        let estimator = RuleReadabilityEstimator::default();
        let estimate = estimator
            .estimate(&blocks(&["The cat sat. The dog ran. We all had fun."]))
            .unwrap();
        assert_eq!(estimate.words, 10);
        assert_eq!(estimate.sentences, 3);
        assert_eq!(estimate.tier, ReadabilityTier::Easy);
    }

    #[test]
    fn test_difficult_text() {
        let text = "Notwithstanding considerable institutional reluctance, \
                    comprehensive interdisciplinary collaboration fundamentally \
                    transformed organizational accountability mechanisms throughout \
                    international governmental administrations, simultaneously \
                    necessitating unprecedented methodological standardization.";
        let estimate = RuleReadabilityEstimator::default()
            .estimate(&blocks(&[text]))
            .unwrap();
        assert_eq!(estimate.sentences, 1);
        assert_eq!(estimate.tier, ReadabilityTier::Difficult);
    }

    #[test]
    fn test_aggregates_across_blocks() {
        let estimator = RuleReadabilityEstimator::default();
        let estimate = estimator
            .estimate(&blocks(&["One two three.", "", "Four five six seven!"]))
            .unwrap();
        assert_eq!(estimate.words, 7);
        assert_eq!(estimate.sentences, 2);
        assert!((estimate.words_per_sentence - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        let estimate = RuleReadabilityEstimator::default()
            .estimate(&blocks(&["no punctuation at all here"]))
            .unwrap();
        assert_eq!(estimate.sentences, 1);
        assert_eq!(estimate.words, 5);
    }

    #[test]
    fn test_no_words_is_none() {
        let estimator = RuleReadabilityEstimator::default();
        assert!(estimator.estimate(&[]).is_none());
        assert!(estimator.estimate(&blocks(&["   ", "\n"])).is_none());
        assert!(estimator.estimate(&blocks(&["123 456. 789!"])).is_none());
    }

    #[test]
    fn test_tier_boundaries() {
        let estimator = RuleReadabilityEstimator::default();
        assert_eq!(estimator.tier(34.0), ReadabilityTier::Easy);
        assert_eq!(estimator.tier(34.01), ReadabilityTier::Medium);
        assert_eq!(estimator.tier(47.0), ReadabilityTier::Medium);
        assert_eq!(estimator.tier(47.01), ReadabilityTier::Difficult);
    }

    #[test]
    fn test_evaluate_text_verdicts() {
        let estimator = RuleReadabilityEstimator::default();
        let t = RatingThresholds::default();

        let (verdict, estimate) = evaluate_text(&estimator, &[], &t);
        assert_eq!(verdict.rating, Rating::InsufficientData);
        assert!(estimate.is_none());

        let (verdict, _) = evaluate_text(&estimator, &blocks(&["Short and simple."]), &t);
        assert_eq!(verdict.rating, Rating::Compliant);
        assert_eq!((verdict.pass, verdict.total), (1, 1));

        let strict = RuleReadabilityEstimator::new(TextRules {
            easy_max: 1.0,
            medium_max: 2.0,
            ..TextRules::default()
        });
        let (verdict, estimate) = evaluate_text(&strict, &blocks(&["Short and simple."]), &t);
        assert_eq!(verdict.rating, Rating::NonCompliant);
        assert_eq!(estimate.unwrap().tier, ReadabilityTier::Difficult);
    }
}
