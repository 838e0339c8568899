//! The compliance report emitted at the end of a run.

use super::{ModuleVerdict, OverallRating, Rating};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Final output of an audit.
///
/// Field order is the serialized key order, so the JSON shape is fixed:
/// `url`, `images`, `text`, `links`, `overall`. The text module only
/// reports its rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    /// Audited URL
    pub url: String,

    /// Image module verdict
    pub images: ModuleVerdict,

    /// Text readability verdict
    #[serde(serialize_with = "rating_only")]
    pub text: ModuleVerdict,

    /// Link module verdict
    pub links: ModuleVerdict,

    /// Worst-case aggregation of the rated modules
    pub overall: OverallRating,
}

impl ComplianceReport {
    /// Module ratings in report order.
    pub fn module_ratings(&self) -> [Rating; 3] {
        [self.images.rating, self.text.rating, self.links.rating]
    }
}

fn rating_only<S: Serializer>(verdict: &ModuleVerdict, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("TextVerdict", 1)?;
    state.serialize_field("rating", &verdict.rating)?;
    state.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_serializes_rating_only() {
        let report = ComplianceReport {
            url: "https://example.com/".to_string(),
            images: ModuleVerdict::new(2, 2, Rating::Compliant),
            text: ModuleVerdict::new(1, 1, Rating::Compliant),
            links: ModuleVerdict::insufficient(),
            overall: OverallRating::Compliant,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["text"], serde_json::json!({ "rating": "Compliant" }));
        assert_eq!(value["links"]["rating"], "insufficient data");
        assert_eq!(
            report.module_ratings(),
            [Rating::Compliant, Rating::Compliant, Rating::InsufficientData]
        );
    }
}
