// src/sources.rs - Seam to the external ad-search provider
use crate::models::{AdRecord, Result};
use async_trait::async_trait;
use tracing::info;

/// An ad-search backend. The provider's query protocol is its own business;
/// the pipeline only ever sees the resulting batch of records.
#[async_trait]
pub trait AdSource {
    fn name(&self) -> &str;
    async fn fetch_ads(
        &self,
        keyword: &str,
        country: &str,
        max_results: usize,
    ) -> Result<Vec<AdRecord>>;
}

/// Reads a provider dump (a JSON array of ad records) from disk. Useful for
/// running the pipeline end-to-end without provider credentials, and for
/// replaying a saved batch.
pub struct JsonFileSource {
    path: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AdSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch_ads(
        &self,
        keyword: &str,
        _country: &str,
        max_results: usize,
    ) -> Result<Vec<AdRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut ads: Vec<AdRecord> = serde_json::from_str(&content)?;

        if max_results > 0 && ads.len() > max_results {
            ads.truncate(max_results);
        }

        info!(
            "📦 Loaded {} ad records from {} (keyword: {})",
            ads.len(),
            self.path,
            keyword
        );
        Ok(ads)
    }
}
