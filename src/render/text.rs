//! Plain text rendering for compliance reports.

use crate::model::{ComplianceReport, ModuleVerdict};

/// Render a short human-readable summary of a report.
pub fn to_text(report: &ComplianceReport) -> String {
    let lines = [
        format!("URL:     {}", report.url),
        format!("Images:  {}", counted(&report.images, "informative images described")),
        format!("Text:    {}", report.text.rating),
        format!("Links:   {}", counted(&report.links, "links descriptive")),
        format!("Overall: {}", report.overall),
    ];
    lines.join("\n")
}

fn counted(verdict: &ModuleVerdict, what: &str) -> String {
    if verdict.total == 0 {
        verdict.rating.to_string()
    } else {
        format!("{} ({}/{} {})", verdict.rating, verdict.pass, verdict.total, what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OverallRating, Rating};

    #[test]
    fn test_to_text() {
        let report = ComplianceReport {
            url: "https://example.com/".to_string(),
            images: ModuleVerdict::new(4, 5, Rating::Compliant),
            text: ModuleVerdict::new(0, 1, Rating::NonCompliant),
            links: ModuleVerdict::insufficient(),
            overall: OverallRating::NonCompliant,
        };
        let text = to_text(&report);

        assert!(text.contains("URL:     https://example.com/"));
        assert!(text.contains("Images:  Compliant (4/5 informative images described)"));
        assert!(text.contains("Text:    Non-compliant"));
        assert!(text.contains("Links:   insufficient data"));
        assert!(text.ends_with("Overall: Non-compliant"));
    }
}
