// src/web_crawler/types.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Per-page request timeout.
    pub timeout_seconds: u64,
    /// Minimum gap between consecutive requests to the same host.
    pub politeness_delay_ms: u64,
    /// How many contact/about subpages to scan after the homepage.
    pub max_contact_pages: usize,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            politeness_delay_ms: 1000,
            max_contact_pages: 3,
            user_agent: "Mozilla/5.0 (compatible; AdLeadCrawler/1.0)".to_string(),
        }
    }
}

/// Outcome of fetching and scanning a single page. Failures stay visible
/// here instead of aborting the crawl: a dead page is a page with no email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    Found(String),
    NoEmail,
    Failed(String),
}
