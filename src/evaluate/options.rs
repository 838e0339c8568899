//! Scoring configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scoring presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPreset {
    /// Baseline rules
    #[default]
    Standard,
    /// Longer alt text, multi-word anchors, multilingual generic phrases
    Strict,
}

/// Every tunable of the rule-based evaluators, passed explicitly to each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Image rules
    pub images: ImageRules,

    /// Readability rules
    pub text: TextRules,

    /// Link rules
    pub links: LinkRules,

    /// Pass-ratio thresholds shared by all modules
    pub thresholds: RatingThresholds,
}

impl ScoringConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a preset.
    pub fn from_preset(preset: ScoringPreset) -> Self {
        match preset {
            ScoringPreset::Standard => Self::default(),
            ScoringPreset::Strict => Self::strict(),
        }
    }

    /// Strict rules.
    pub fn strict() -> Self {
        let mut config = Self::default();
        config.images.min_alt_chars = 5;
        config.links.min_words = 2;
        config.links.generic_phrases.extend(
            [
                "learn more",
                "see more",
                "view more",
                "open",
                "info",
                "discover",
                "clicca qui",
                "qui",
                "scopri di più",
                "leggi di più",
                "approfondisci",
                "continua",
                "dettagli",
                "vai",
            ]
            .iter()
            .map(|s| s.to_string()),
        );
        config
    }

    /// Set image rules.
    pub fn with_image_rules(mut self, rules: ImageRules) -> Self {
        self.images = rules;
        self
    }

    /// Set readability rules.
    pub fn with_text_rules(mut self, rules: TextRules) -> Self {
        self.text = rules;
        self
    }

    /// Set link rules.
    pub fn with_link_rules(mut self, rules: LinkRules) -> Self {
        self.links = rules;
        self
    }

    /// Set rating thresholds.
    pub fn with_thresholds(mut self, compliant: f64, partial: f64) -> Self {
        self.thresholds = RatingThresholds { compliant, partial };
        self
    }

    /// Check that thresholds and weights are usable.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let in_range = |v: f64| v > 0.0 && v <= 1.0;
        if !in_range(t.compliant) || !in_range(t.partial) {
            return Err(Error::Config(format!(
                "rating thresholds must be in (0, 1], got compliant={} partial={}",
                t.compliant, t.partial
            )));
        }
        if t.partial > t.compliant {
            return Err(Error::Config(format!(
                "partial threshold {} exceeds compliant threshold {}",
                t.partial, t.compliant
            )));
        }

        let r = &self.text;
        if !(r.sentence_weight >= 0.0 && r.word_weight >= 0.0) {
            return Err(Error::Config("readability weights must be non-negative".into()));
        }
        if !(r.easy_max <= r.medium_max) {
            return Err(Error::Config(format!(
                "easy_max {} exceeds medium_max {}",
                r.easy_max, r.medium_max
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to the standard values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("JSON parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize as pretty JSON, e.g. as a starting point for a config file.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("JSON serialization error: {}", e)))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            images: ImageRules::default(),
            text: TextRules::default(),
            links: LinkRules::default(),
            thresholds: RatingThresholds::default(),
        }
    }
}

/// Rules for deciding whether an image needs alternative text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRules {
    /// Substrings of the image path that hint at decoration
    pub decorative_patterns: Vec<String>,

    /// `role` values that mark an image as presentational
    pub presentational_roles: Vec<String>,

    /// Alt values that say nothing about the image
    pub placeholder_alts: Vec<String>,

    /// Minimum alt length in characters (shorter counts as placeholder)
    pub min_alt_chars: usize,
}

impl Default for ImageRules {
    fn default() -> Self {
        Self {
            decorative_patterns: to_strings(&[
                "icon",
                "spacer",
                "divider",
                "separator",
                "bullet",
                "decoration",
            ]),
            presentational_roles: to_strings(&["presentation", "none"]),
            placeholder_alts: to_strings(&[
                "image",
                "img",
                "photo",
                "picture",
                "graphic",
                "icon",
                "banner",
                "logo",
                "untitled",
                "screenshot",
                "thumbnail",
                "placeholder",
            ]),
            min_alt_chars: 1,
        }
    }
}

/// Readability composite: `score = wps * sentence_weight + cpw * word_weight`.
///
/// `score <= easy_max` is easy, `score <= medium_max` is medium, anything
/// above is difficult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRules {
    /// Weight of average words per sentence
    pub sentence_weight: f64,

    /// Weight of average characters per word
    pub word_weight: f64,

    /// Upper bound (inclusive) of the easy tier
    pub easy_max: f64,

    /// Upper bound (inclusive) of the medium tier
    pub medium_max: f64,
}

impl Default for TextRules {
    fn default() -> Self {
        // 15 words/sentence at 4.7 chars/word is easy; 25 at 5.5 is difficult.
        Self {
            sentence_weight: 1.0,
            word_weight: 4.0,
            easy_max: 34.0,
            medium_max: 47.0,
        }
    }
}

/// Rules for classifying anchor text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkRules {
    /// Normalized phrases that do not describe a destination
    pub generic_phrases: Vec<String>,

    /// Minimum alphabetic words for a descriptive anchor (0 = no minimum)
    pub min_words: usize,
}

impl Default for LinkRules {
    fn default() -> Self {
        Self {
            generic_phrases: to_strings(&[
                "click here",
                "read more",
                "here",
                "link",
                "more",
                "this page",
            ]),
            min_words: 0,
        }
    }
}

/// Pass-ratio thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingThresholds {
    /// Ratio at or above which a module is compliant
    pub compliant: f64,

    /// Ratio at or above which a module is partially compliant
    pub partial: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            compliant: 0.8,
            partial: 0.5,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
