//! Markup detection for fetched page bodies.

use crate::error::{Error, Result};

/// Kind of markup found at the start of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    /// HTML document (doctype, `<html>`, or any leading tag)
    Html,
    /// XHTML served with an XML declaration
    Xhtml,
}

impl std::fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupKind::Html => write!(f, "HTML"),
            MarkupKind::Xhtml => write!(f, "XHTML"),
        }
    }
}

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const XML_DECL: &[u8] = b"<?xml";

/// Detect whether a body looks like HTML markup.
///
/// # Returns
/// * `Ok(MarkupKind)` if the first non-whitespace byte opens a tag
/// * `Err(Error::Parse)` if the body is empty or is not markup
///
/// # Example
/// ```
/// use a11yscore::detect::{detect_markup, MarkupKind};
///
/// let kind = detect_markup(b"<!DOCTYPE html><html></html>").unwrap();
/// assert_eq!(kind, MarkupKind::Html);
/// ```
pub fn detect_markup(data: &[u8]) -> Result<MarkupKind> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or_else(|| Error::Parse("empty document".into()))?;
    let body = &data[start..];

    if body.len() >= XML_DECL.len() && body[..XML_DECL.len()].eq_ignore_ascii_case(XML_DECL) {
        return Ok(MarkupKind::Xhtml);
    }

    match body.first() {
        Some(b'<') => Ok(MarkupKind::Html),
        _ => Err(Error::Parse("document does not start with markup".into())),
    }
}

/// Check if bytes look like HTML markup.
pub fn is_html_bytes(data: &[u8]) -> bool {
    detect_markup(data).is_ok()
}

/// Check if a `Content-Type` header value names an HTML media type.
///
/// Parameters such as `charset` are ignored.
pub fn is_html_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    matches!(mime.as_str(), "text/html" | "application/xhtml+xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_doctype() {
        let kind = detect_markup(b"<!DOCTYPE html>\n<html><body></body></html>").unwrap();
        assert_eq!(kind, MarkupKind::Html);
    }

    #[test]
    fn test_detect_bom_and_whitespace() {
        let kind = detect_markup(b"\xEF\xBB\xBF\n\n  <html></html>").unwrap();
        assert_eq!(kind, MarkupKind::Html);
    }

    #[test]
    fn test_detect_xhtml() {
        let kind = detect_markup(b"<?xml version=\"1.0\"?><html/>").unwrap();
        assert_eq!(kind, MarkupKind::Xhtml);
    }

    #[test]
    fn test_detect_empty() {
        assert!(matches!(detect_markup(b""), Err(Error::Parse(_))));
        assert!(matches!(detect_markup(b"   \n\t"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_detect_not_markup() {
        assert!(!is_html_bytes(b"{\"json\": true}"));
        assert!(!is_html_bytes(b"%PDF-1.7"));
    }

    #[test]
    fn test_content_type() {
        assert!(is_html_content_type("text/html; charset=utf-8"));
        assert!(is_html_content_type("Application/XHTML+XML"));
        assert!(!is_html_content_type("application/json"));
        assert!(!is_html_content_type("image/png"));
    }
}
