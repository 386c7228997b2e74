// src/web_crawler/page_scan.rs - Email scan of a single page
use regex::Regex;
use scraper::{Html, Selector};

pub struct PageScanner {
    email_regex: Regex,
}

impl PageScanner {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
        }
    }

    /// Scans page HTML for one contact email. A `mailto:` anchor is higher
    /// confidence than a free-text match, so it always wins; the regex over
    /// visible text is only consulted when no usable `mailto:` exists.
    pub fn scan(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);

        let mailto_selector = Selector::parse(r#"a[href^="mailto:"]"#).unwrap();
        for anchor in document.select(&mailto_selector) {
            if let Some(href) = anchor.value().attr("href") {
                let address = href
                    .trim_start_matches("mailto:")
                    .split('?')
                    .next()
                    .unwrap_or("")
                    .trim();
                if !address.is_empty() {
                    return Some(address.to_string());
                }
            }
        }

        let text = document.root_element().text().collect::<Vec<_>>().join(" ");
        self.email_regex.find(&text).map(|m| m.as_str().to_string())
    }
}
