// src/orchestrator.rs - Single-pass lead pipeline: extract -> dedup -> crawl
use crate::dedup::{DomainDeduplicator, Rejection};
use crate::extractor::LeadExtractor;
use crate::models::{AdRecord, EnrichedLead, RunStats};
use crate::web_crawler::EmailFinder;
use tracing::{debug, info};

pub struct Orchestrator<F: EmailFinder> {
    extractor: LeadExtractor,
    crawler: F,
}

impl<F: EmailFinder> Orchestrator<F> {
    pub fn new(crawler: F) -> Self {
        Self {
            extractor: LeadExtractor::new(),
            crawler,
        }
    }

    /// Processes one batch of ad records in input order. Each record is fully
    /// resolved before the next begins; no record depends on another's crawl
    /// result. The deduplicator lives and dies with this call, so concurrent
    /// runs never share seen-domain state.
    pub async fn run(&self, ads: &[AdRecord], keyword: &str) -> (Vec<EnrichedLead>, RunStats) {
        let mut dedup = DomainDeduplicator::new();
        let mut stats = RunStats {
            fetched: ads.len(),
            ..RunStats::default()
        };
        let mut leads = Vec::new();

        info!("🔄 Processing {} raw ads...", ads.len());

        for ad in ads {
            let Some(candidate) = self.extractor.extract(ad, keyword) else {
                stats.no_website += 1;
                continue;
            };

            let domain = DomainDeduplicator::normalize(&candidate.website_url);
            match dedup.admit(&domain) {
                Err(Rejection::BlockedSocial) => {
                    debug!("Skipping social platform domain: {}", domain);
                    stats.blocked_social += 1;
                    continue;
                }
                Err(Rejection::Duplicate) => {
                    debug!("Skipping duplicate domain: {}", domain);
                    stats.duplicates += 1;
                    continue;
                }
                Ok(()) => {}
            }

            info!("🔎 Analyzing: {} ({})", candidate.company, candidate.website_url);

            let email = self.crawler.find_email(&candidate.website_url).await;
            match &email {
                Some(email) => info!("   -> Found email: {}", email),
                None => info!("   -> No email found"),
            }

            leads.push(EnrichedLead::new(candidate, email));
            stats.processed += 1;
        }

        (leads, stats)
    }
}
