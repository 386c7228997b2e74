// src/extractor.rs - Ad payload -> CandidateLead fallback chains
use crate::models::{AdRecord, CandidateLead};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Key variants for the ad detail / archive URL, in priority order.
const DETAIL_URL_KEYS: [&str; 4] = [
    "ad_archive_url",
    "adArchiveUrl",
    "snapshotUrl",
    "ad_library_url",
];

const PAGE_NAME_KEYS: [&str; 2] = ["pageName", "page_name"];
const LINK_URL_KEYS: [&str; 2] = ["linkUrl", "link_url"];
const IMAGE_URL_KEYS: [&str; 2] = ["original_image_url", "resized_image_url"];

pub struct LeadExtractor {
    url_regex: Regex,
}

impl LeadExtractor {
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap(),
        }
    }

    /// Maps one raw ad record to a candidate lead. Returns `None` when no
    /// website URL can be derived from any of the known fields - the caller
    /// counts that as a "no website" outcome.
    pub fn extract(&self, ad: &AdRecord, keyword: &str) -> Option<CandidateLead> {
        let snapshot = ad.snapshot();

        let website_url = self.resolve_website(&ad.0, snapshot)?;

        let company = snapshot
            .and_then(|s| first_str(s, &PAGE_NAME_KEYS))
            .or_else(|| first_str(&ad.0, &PAGE_NAME_KEYS))
            .unwrap_or_else(|| "Unknown".to_string());

        let lead = CandidateLead {
            company,
            website_url,
            ad_detail_url: first_str(&ad.0, &DETAIL_URL_KEYS),
            ad_image_url: snapshot.and_then(resolve_ad_image),
            keyword: keyword.to_string(),
        };

        debug!("Extracted lead: {} ({})", lead.company, lead.website_url);
        Some(lead)
    }

    /// Website resolution, first non-empty wins:
    /// 1. direct link on the snapshot (the ad's CTA)
    /// 2. link on the first carousel card
    /// 3. URL pattern in free text (body, title, creative body)
    fn resolve_website(&self, ad: &Value, snapshot: Option<&Value>) -> Option<String> {
        if let Some(snapshot) = snapshot {
            if let Some(url) = first_str(snapshot, &LINK_URL_KEYS) {
                return Some(url);
            }
            if let Some(url) = first_card(snapshot).and_then(|card| first_str(card, &LINK_URL_KEYS))
            {
                return Some(url);
            }
        }

        let body_text = free_text(ad, snapshot)?;
        self.url_regex
            .find(&body_text)
            .map(|m| m.as_str().to_string())
    }
}

/// First non-empty string under any of `keys`, trimmed.
fn first_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn first_card(snapshot: &Value) -> Option<&Value> {
    snapshot.get("cards").and_then(|cards| cards.get(0))
}

/// Ad image: first image entry's original URL, falling back to the resized
/// variant, then the same two keys on the first carousel card. Absence is fine.
fn resolve_ad_image(snapshot: &Value) -> Option<String> {
    snapshot
        .get("images")
        .and_then(|images| images.get(0))
        .and_then(|image| first_str(image, &IMAGE_URL_KEYS))
        .or_else(|| first_card(snapshot).and_then(|card| first_str(card, &IMAGE_URL_KEYS)))
}

/// Free-text fields that may contain a URL. `body` is an object with a `text`
/// key in most payloads but a bare string in some scrapers' output.
fn free_text(ad: &Value, snapshot: Option<&Value>) -> Option<String> {
    let body_text = snapshot.and_then(|s| match s.get("body") {
        Some(Value::Object(_)) => s
            .get("body")
            .and_then(|b| b.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Some(Value::String(text)) => Some(text.clone()),
        _ => None,
    });

    body_text
        .filter(|text| !text.is_empty())
        .or_else(|| snapshot.and_then(|s| first_str(s, &["title"])))
        .or_else(|| first_str(ad, &["ad_creative_body"]))
}
