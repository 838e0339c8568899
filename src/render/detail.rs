//! Detailed report: compliance report plus findings and suggestions.

use super::json::{serialize, JsonFormat};
use crate::error::Result;
use crate::evaluate::{Evaluation, Findings, ReadabilityTier};
use crate::model::ComplianceReport;
use serde::Serialize;

#[derive(Serialize)]
struct DetailedReport<'a> {
    report: &'a ComplianceReport,
    findings: &'a Findings,
    suggestions: Vec<String>,
}

/// Remediation hints derived from the findings.
pub fn suggestions(evaluation: &Evaluation) -> Vec<String> {
    let findings = &evaluation.findings;
    let mut out = Vec::new();

    if !findings.images.is_empty() {
        out.push(
            "Add descriptive alt text to informative images (missing or placeholder alt)."
                .to_string(),
        );
    }
    if findings
        .readability
        .as_ref()
        .is_some_and(|r| r.tier == ReadabilityTier::Difficult)
    {
        out.push(
            "Simplify the page text: use shorter sentences and simpler vocabulary.".to_string(),
        );
    }
    if !findings.links.is_empty() {
        out.push(
            "Replace generic anchors (e.g., 'click here') with descriptive link text.".to_string(),
        );
    }
    if out.is_empty() {
        out.push("No major baseline issues detected.".to_string());
    }
    out
}

/// Convert an evaluation to JSON with `report`, `findings`, and `suggestions`.
pub fn to_detailed_json(evaluation: &Evaluation, format: JsonFormat) -> Result<String> {
    let detailed = DetailedReport {
        report: &evaluation.report,
        findings: &evaluation.findings,
        suggestions: suggestions(evaluation),
    };
    serialize(&detailed, format)
}
