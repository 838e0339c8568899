//! HTML to [`PageDocument`] extraction.

use super::ExtractOptions;
use crate::detect::detect_markup;
use crate::error::Result;
use crate::model::{ImageElement, LinkElement, PageDocument, TextBlock};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extract images, text blocks, and links from an HTML page.
///
/// # Errors
/// Returns [`crate::Error::Parse`] when the body is empty or is not markup.
///
/// # Example
/// ```
/// use a11yscore::fetch::{extract_document, ExtractOptions};
/// use url::Url;
///
/// let base = Url::parse("https://example.com/about/").unwrap();
/// let html = r#"<html><body><img src="team.jpg" alt="Our team"><a href="/">Home</a></body></html>"#;
/// let doc = extract_document(html, &base, &ExtractOptions::default()).unwrap();
/// assert_eq!(doc.images[0].src, "https://example.com/about/team.jpg");
/// assert_eq!(doc.links[0].href, "https://example.com/");
/// ```
pub fn extract_document(html: &str, base: &Url, options: &ExtractOptions) -> Result<PageDocument> {
    detect_markup(html.as_bytes())?;

    let document = Html::parse_document(html);
    let mut page = PageDocument::new(base.as_str());

    extract_images(&document, base, options, &mut page);
    extract_text_blocks(&document, options, &mut page);
    extract_links(&document, base, options, &mut page);

    log::debug!(
        "Extracted {} images, {} text blocks, {} links from {}",
        page.images.len(),
        page.text_blocks.len(),
        page.links.len(),
        base
    );

    Ok(page)
}

fn extract_images(document: &Html, base: &Url, options: &ExtractOptions, page: &mut PageDocument) {
    let selector = Selector::parse("img").expect("valid selector");
    let mut skipped = 0usize;

    for element in document.select(&selector) {
        let el = element.value();
        let src = match el.attr("src").map(str::trim) {
            Some(src) if !src.is_empty() => src,
            _ => {
                skipped += 1;
                continue;
            }
        };
        if options.skip_data_uris && src.get(..5).is_some_and(|s| s.eq_ignore_ascii_case("data:")) {
            skipped += 1;
            continue;
        }

        let mut image = ImageElement::new(resolve(base, src, options.resolve_urls))
            .with_role(el.attr("role").unwrap_or(""));
        image.alt = el.attr("alt").map(str::to_string);
        image.aria_hidden = el
            .attr("aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
        page.add_image(image);
    }

    if skipped > 0 {
        log::debug!("Skipped {} images without a usable src", skipped);
    }
}

fn extract_text_blocks(document: &Html, options: &ExtractOptions, page: &mut PageDocument) {
    let selector = Selector::parse("p, li").expect("valid selector");

    for element in document.select(&selector) {
        let text = element_text(&element);
        if text.is_empty() || text.chars().count() < options.min_text_chars {
            continue;
        }
        page.add_text_block(TextBlock::new(text));
        if options.max_text_blocks > 0 && page.text_blocks.len() >= options.max_text_blocks {
            log::debug!("Text block limit ({}) reached", options.max_text_blocks);
            break;
        }
    }
}

fn extract_links(document: &Html, base: &Url, options: &ExtractOptions, page: &mut PageDocument) {
    let selector = Selector::parse("a").expect("valid selector");
    let img_selector = Selector::parse("img").expect("valid selector");

    for element in document.select(&selector) {
        let href = match element.value().attr("href").map(str::trim) {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };

        let mut text = element_text(&element);
        if text.is_empty() {
            text = element
                .value()
                .attr("aria-label")
                .map(collapse_whitespace)
                .unwrap_or_default();
        }
        if text.is_empty() {
            let alts: Vec<&str> = element
                .select(&img_selector)
                .filter_map(|img| img.value().attr("alt"))
                .map(str::trim)
                .filter(|alt| !alt.is_empty())
                .collect();
            text = alts.join(" ");
        }

        page.add_link(LinkElement::new(text, resolve(base, href, options.resolve_urls)));
    }
}

/// Whitespace-collapsed text content of an element.
fn element_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn resolve(base: &Url, reference: &str, enabled: bool) -> String {
    if !enabled {
        return reference.to_string();
    }
    base.join(reference)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| reference.to_string())
}
