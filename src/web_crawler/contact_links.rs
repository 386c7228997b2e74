// src/web_crawler/contact_links.rs - Likely contact/about subpage selection
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Substrings marking a link as a likely contact page, matched
/// case-insensitively against the anchor text and the href.
const CONTACT_KEYWORDS: [&str; 5] = ["contact", "kontakt", "impressum", "about", "über uns"];

pub struct ContactLinkFinder {
    max_pages: usize,
}

impl ContactLinkFinder {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Collects up to `max_pages` contact-looking links from homepage HTML,
    /// resolved against `base`. Off-host links are discarded - the crawl
    /// never leaves the lead's own domain. First-seen order, deduplicated.
    pub fn find(&self, html: &str, base: &Url) -> Vec<Url> {
        let document = Html::parse_document(html);
        let link_selector = Selector::parse("a[href]").unwrap();

        let mut seen = HashSet::new();
        let mut pages = Vec::new();

        for element in document.select(&link_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let text = element.text().collect::<String>().to_lowercase();
            let href_lower = href.to_lowercase();

            if !CONTACT_KEYWORDS
                .iter()
                .any(|k| text.contains(k) || href_lower.contains(k))
            {
                continue;
            }

            let Ok(resolved) = base.join(href) else {
                continue;
            };
            if resolved.host_str() != base.host_str() {
                continue;
            }

            if seen.insert(resolved.to_string()) {
                pages.push(resolved);
                if pages.len() == self.max_pages {
                    break;
                }
            }
        }

        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(html: &str) -> Vec<String> {
        let base = Url::parse("https://acme.test/").unwrap();
        ContactLinkFinder::new(3)
            .find(html, &base)
            .into_iter()
            .map(|u| u.to_string())
            .collect()
    }

    #[test]
    fn matches_keyword_in_href_or_anchor_text() {
        let html = r#"
            <a href="/kontakt">Hier</a>
            <a href="/page-7">Contact us</a>
            <a href="/products">Products</a>"#;
        assert_eq!(
            find(html),
            vec!["https://acme.test/kontakt", "https://acme.test/page-7"]
        );
    }

    #[test]
    fn never_returns_more_than_the_cap() {
        let html = r#"
            <a href="/contact">1</a>
            <a href="/about">2</a>
            <a href="/impressum">3</a>
            <a href="/about-team">4</a>
            <a href="/contact-sales">5</a>"#;
        assert_eq!(find(html).len(), 3);
    }

    #[test]
    fn external_hosts_are_discarded() {
        let html = r#"
            <a href="https://other.test/contact">External contact</a>
            <a href="https://acme.test/contact">Internal contact</a>"#;
        assert_eq!(find(html), vec!["https://acme.test/contact"]);
    }

    #[test]
    fn duplicates_collapse_keeping_first_seen_order() {
        let html = r#"
            <a href="/about">About</a>
            <a href="/contact">Contact</a>
            <a href="/about">About again</a>"#;
        assert_eq!(
            find(html),
            vec!["https://acme.test/about", "https://acme.test/contact"]
        );
    }

    #[test]
    fn umlaut_keyword_matches_case_insensitively() {
        let html = r#"<a href="/ueber">Über uns</a>"#;
        assert_eq!(find(html), vec!["https://acme.test/ueber"]);
    }

    #[test]
    fn page_without_contact_links_yields_empty() {
        let html = r#"<a href="/shop">Shop</a><a href="/blog">Blog</a>"#;
        assert!(find(html).is_empty());
    }
}
