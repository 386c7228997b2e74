use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One raw ad payload as returned by the ad-search provider.
///
/// Different scrapers return different key spellings (camelCase vs snake_case,
/// `ad_archive_url` vs `snapshotUrl`, ...), so the record stays an opaque JSON
/// value and all field access goes through the extractor's fallback chains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdRecord(pub serde_json::Value);

impl AdRecord {
    pub fn snapshot(&self) -> Option<&serde_json::Value> {
        self.0.get("snapshot").filter(|v| v.is_object())
    }
}

/// A lead derived from a single ad, before email discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateLead {
    pub company: String,
    pub website_url: String,
    pub ad_detail_url: Option<String>,
    pub ad_image_url: Option<String>,
    pub keyword: String,
}

/// Terminal pipeline output: a candidate lead plus the discovered email
/// (or the "Not Found" sentinel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedLead {
    pub company: String,
    pub website: String,
    pub email: String,
    pub ad_url: Option<String>,
    pub ad_image: Option<String>,
    pub keyword: String,
}

pub const EMAIL_NOT_FOUND: &str = "Not Found";

impl EnrichedLead {
    pub fn new(candidate: CandidateLead, email: Option<String>) -> Self {
        Self {
            company: candidate.company,
            website: candidate.website_url,
            email: email.unwrap_or_else(|| EMAIL_NOT_FOUND.to_string()),
            ad_url: candidate.ad_detail_url,
            ad_image: candidate.ad_image_url,
            keyword: candidate.keyword,
        }
    }
}

/// Counters for one pipeline run. `duplicates` and `blocked_social` are kept
/// separate: a domain we already crawled is not the same outcome as a
/// facebook.com landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunStats {
    pub fetched: usize,
    pub duplicates: usize,
    pub no_website: usize,
    pub blocked_social: usize,
    pub processed: usize,
}
