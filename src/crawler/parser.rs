//! HTML parser for extracting visible text and links
//!
//! This module handles parsing HTML content to extract:
//! - The concatenated text of the `<body>` element
//! - The raw `href` of every anchor, in document order

use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Text content of the body element
    pub text: String,

    /// Raw href values of all anchors, unresolved and unfiltered
    pub links: Vec<String>,
}

/// Parses HTML content once and extracts both text and links
///
/// # Example
///
/// ```
/// use term_ripple::crawler::parse_html;
///
/// let html = r#"<html><body><p>Hello</p><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.text, "HelloLink");
/// assert_eq!(parsed.links, vec!["/page"]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        text: body_text(&document),
        links: anchor_hrefs(&document),
    }
}

/// Returns the concatenated text of the document body
pub fn extract_text(html: &str) -> String {
    body_text(&Html::parse_document(html))
}

/// Returns every anchor's href value in document order
///
/// Empty, fragment-only and relative values are all kept; filtering is the
/// caller's job.
pub fn extract_links(html: &str) -> Vec<String> {
    anchor_hrefs(&Html::parse_document(html))
}

fn body_text(document: &Html) -> String {
    let Ok(body_selector) = Selector::parse("body") else {
        return String::new();
    };

    document
        .select(&body_selector)
        .flat_map(|body| body.text())
        .collect()
}

fn anchor_hrefs(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
