//! Ratings and per-module verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Module-level rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Pass ratio at or above the compliant threshold
    #[serde(rename = "Compliant")]
    Compliant,
    /// Pass ratio between the partial and compliant thresholds
    #[serde(rename = "Partially compliant")]
    Partial,
    /// Pass ratio below the partial threshold
    #[serde(rename = "Non-compliant")]
    NonCompliant,
    /// No evaluable items; not a failure
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

impl Rating {
    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Compliant => "Compliant",
            Rating::Partial => "Partially compliant",
            Rating::NonCompliant => "Non-compliant",
            Rating::InsufficientData => "insufficient data",
        }
    }

    /// Whether this rating takes part in the overall aggregation.
    pub fn is_rated(&self) -> bool {
        !matches!(self, Rating::InsufficientData)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page-level rating. Never "insufficient data".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallRating {
    /// Every rated module is compliant (or nothing could be rated)
    #[serde(rename = "Compliant")]
    Compliant,
    /// At least one module is partial and none is non-compliant
    #[serde(rename = "Partially compliant")]
    PartiallyCompliant,
    /// At least one module is non-compliant
    #[serde(rename = "Non-compliant")]
    NonCompliant,
}

impl OverallRating {
    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallRating::Compliant => "Compliant",
            OverallRating::PartiallyCompliant => "Partially compliant",
            OverallRating::NonCompliant => "Non-compliant",
        }
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one evaluation module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVerdict {
    /// Items that passed
    pub pass: u32,

    /// Items evaluated
    pub total: u32,

    /// Rating derived from `pass / total`
    pub rating: Rating,
}

impl ModuleVerdict {
    /// Create a verdict.
    pub fn new(pass: u32, total: u32, rating: Rating) -> Self {
        Self {
            pass,
            total,
            rating,
        }
    }

    /// Verdict for a module with nothing to evaluate.
    pub fn insufficient() -> Self {
        Self::new(0, 0, Rating::InsufficientData)
    }
}
