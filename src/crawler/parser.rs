//! HTML parser for extracting links
//!
//! Every `<a href>` in the document is resolved against the page URL and
//! returned in document order. No filtering happens here: scheme and
//! authority checks belong to the crawl engine.

use crate::crawler::LinkExtractor;
use crate::MirrorError;
use scraper::{Html, Selector};
use url::Url;

/// Extracts all anchor targets from an HTML document
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The base URL for resolving relative links
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Absolute URLs in document order; hrefs that cannot
///   be resolved are left out
/// * `Err(MirrorError::HtmlParse)` - The document could not be processed
///
/// # Example
///
/// ```
/// use site_mirror::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &base_url).unwrap();
/// assert_eq!(links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Result<Vec<String>, MirrorError> {
    let a_selector = Selector::parse("a[href]").map_err(|e| MirrorError::HtmlParse {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::trace!(
            "{} recoverable HTML errors in {}",
            document.errors.len(),
            base_url
        );
    }

    let mut links = Vec::new();
    for element in document.select(&a_selector) {
        if let Some(href) = element.value().attr("href") {
            match base_url.join(href) {
                Ok(absolute_url) => links.push(absolute_url.to_string()),
                Err(e) => tracing::debug!("Skipping unresolvable link {:?} on {}: {}", href, base_url, e),
            }
        }
    }

    Ok(links)
}

/// Link extractor backed by the `scraper` HTML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, content: &str, base_url: &Url) -> Result<Vec<String>, MirrorError> {
        extract_links(content, base_url)
    }
}
