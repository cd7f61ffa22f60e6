//! Link extraction from fetched HTML
//!
//! Pulls the `href` value of every anchor tag out of a page body and
//! resolves it to an absolute URL against the scheme and host of the page it
//! was found on. Duplicate hrefs on the same page collapse to one entry;
//! deduplication against other pages belongs to the frontier.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts all anchor hrefs from an HTML body as absolute URLs
///
/// Relative links resolve against the base page's origin (scheme + host),
/// matching how the crawler treats every page as rooted at its site. Links
/// that are already absolute pass through resolution unchanged. A body the
/// tokenizer cannot make sense of yields an empty set, never an error.
///
/// # Examples
///
/// ```
/// use linktrawl::extract::extract_links;
/// use url::Url;
///
/// let base = Url::parse("https://x.test/page").unwrap();
/// let links = extract_links(r#"<a href="/watch?v=1">w</a>"#, &base);
/// assert!(links.contains("https://x.test/watch?v=1"));
/// ```
pub fn extract_links(html: &str, base: &Url) -> HashSet<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return HashSet::new(),
    };

    let origin = page_origin(base);

    let mut links = HashSet::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute) = resolve_href(href, &origin) {
                links.insert(absolute);
            }
        }
    }

    links
}

/// Reduces a page URL to its origin (scheme + host, root path)
fn page_origin(base: &Url) -> Url {
    let mut origin = base.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    origin
}

/// Resolves a raw href to an absolute URL, dropping values that cannot
/// resolve to an http(s) URL
fn resolve_href(href: &str, origin: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    match origin.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://x.test/page").unwrap()
    }

    #[test]
    fn test_extract_relative_link() {
        let links = extract_links(r#"<a href="/watch?v=1">Link</a>"#, &base_url());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://x.test/watch?v=1"));
    }

    #[test]
    fn test_extract_absolute_link_unchanged() {
        let links = extract_links(r#"<a href="https://other.test/page">Link</a>"#, &base_url());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://other.test/page"));
    }

    #[test]
    fn test_relative_link_resolves_against_origin() {
        // A bare relative path resolves against the host root, not the page path
        let base = Url::parse("https://x.test/a/b").unwrap();
        let links = extract_links(r#"<a href="other">Link</a>"#, &base);
        assert!(links.contains("https://x.test/other"));
    }

    #[test]
    fn test_duplicate_hrefs_collapse() {
        let html = r#"<a href="/watch?v=1">A</a><a href="/watch?v=1">B</a>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_multiple_links() {
        let html = r#"
            <html><body>
                <a href="/watch?v=1">One</a>
                <a href="/watch?v=2">Two</a>
                <a href="https://other.test/watch?v=3">Three</a>
            </body></html>
        "#;
        let links = extract_links(html, &base_url());
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let links = extract_links(r#"<a name="top">anchor</a>"#, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_non_http_scheme_dropped() {
        let links = extract_links(r#"<a href="mailto:me@x.test">mail</a>"#, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_garbage_body_yields_empty_set() {
        let links = extract_links("\u{0}\u{1}<<<>>> not html at all", &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_href_ignored() {
        let links = extract_links(r#"<a href="">empty</a>"#, &base_url());
        assert!(links.is_empty());
    }
}
