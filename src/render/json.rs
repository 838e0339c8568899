//! JSON rendering for compliance reports.

use crate::error::{Error, Result};
use crate::model::ComplianceReport;
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
///
/// Keys always come out as `url`, `images`, `text`, `links`, `overall`, so
/// equal reports render to identical bytes.
pub fn to_json(report: &ComplianceReport, format: JsonFormat) -> Result<String> {
    serialize(report, format)
}

pub(crate) fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
