//! HTML parsing for link discovery
//!
//! Candidate links for further traversal are exactly the `href` targets of
//! anchor elements; no other resource-discovery heuristic is applied. The
//! optional comment/script scans additionally pick up absolute http(s) URLs
//! embedded in comment nodes and `<script>` bodies when enabled.

use crate::config::CrawlOptions;
use scraper::{Html, Node, Selector};
use url::Url;

/// Extracts candidate links from a fetched document
///
/// Anchor `href` values are resolved against `base_url`; only http(s) results
/// survive. `javascript:`, `mailto:`, `tel:` and `data:` targets, fragments,
/// and unparseable hrefs are skipped.
pub fn extract_links(html: &str, base_url: &Url, options: &CrawlOptions) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    if options.parse_html_comments {
        for node in document.tree.nodes() {
            if let Node::Comment(comment) = node.value() {
                scan_for_absolute_urls(comment, &mut links);
            }
        }
    }

    if options.parse_script_tags {
        if let Ok(script_selector) = Selector::parse("script") {
            for element in document.select(&script_selector) {
                for text in element.text() {
                    scan_for_absolute_urls(text, &mut links);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// Scans raw text for absolute http(s) URLs and appends valid ones
fn scan_for_absolute_urls(text: &str, links: &mut Vec<String>) {
    const TERMINATORS: &[char] = &['"', '\'', '`', '<', '>', ')', ' ', '\t', '\n', '\r'];

    let mut rest = text;
    while let Some(pos) = rest.find("http") {
        let candidate = &rest[pos..];
        if !candidate.starts_with("http://") && !candidate.starts_with("https://") {
            rest = &rest[pos + 4..];
            continue;
        }

        let end = candidate
            .find(|c: char| TERMINATORS.contains(&c))
            .unwrap_or(candidate.len());
        let url_str = candidate[..end].trim_end_matches(&[',', '.', ';'][..]);

        if Url::parse(url_str).is_ok() {
            links.push(url_str.to_string());
        }

        rest = &candidate[end..];
    }
}
