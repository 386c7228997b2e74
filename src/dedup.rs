// src/dedup.rs - Domain-level deduplication for one pipeline run
use std::collections::HashSet;

/// Ad-library hosts: an ad whose landing page is the platform itself carries
/// no crawlable company website.
const BLOCKED_SOCIAL_HOSTS: [&str; 4] = [
    "facebook.com",
    "www.facebook.com",
    "instagram.com",
    "www.instagram.com",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BlockedSocial,
    Duplicate,
}

/// Tracks the domains already admitted during one run. Owned by the run -
/// never shared across runs, so concurrent runs cannot interfere.
#[derive(Debug, Default)]
pub struct DomainDeduplicator {
    seen: HashSet<String>,
}

impl DomainDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces a website URL to its dedup key: query string stripped,
    /// `http(s)://` prefix stripped, everything after the first `/` dropped,
    /// lowercased.
    pub fn normalize(url: &str) -> String {
        let without_query = url.split('?').next().unwrap_or("");
        let without_scheme = without_query
            .strip_prefix("https://")
            .or_else(|| without_query.strip_prefix("http://"))
            .unwrap_or(without_query);
        without_scheme
            .split('/')
            .next()
            .unwrap_or("")
            .to_lowercase()
    }

    /// Admits a normalized domain into the run, or rejects it with the reason.
    /// Must run before any crawl is attempted - the crawl is the expensive
    /// step and must never run twice for one domain inside a run.
    pub fn admit(&mut self, domain: &str) -> Result<(), Rejection> {
        if BLOCKED_SOCIAL_HOSTS.contains(&domain) {
            return Err(Rejection::BlockedSocial);
        }
        if !self.seen.insert(domain.to_string()) {
            return Err(Rejection::Duplicate);
        }
        Ok(())
    }
}
