//! Data model for page audits.
//!
//! This module defines the types that flow through the pipeline: the parsed
//! page handed over by the document accessor, the per-module verdicts, and
//! the final report.

mod document;
mod element;
mod report;
mod verdict;

pub use document::PageDocument;
pub use element::{ImageElement, LinkElement, TextBlock};
pub use report::ComplianceReport;
pub use verdict::{ModuleVerdict, OverallRating, Rating};
