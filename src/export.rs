// src/export.rs - CSV export and run summary
use crate::models::{EnrichedLead, Result, RunStats};
use chrono::Utc;
use std::io::Write;

pub struct LeadExporter;

impl LeadExporter {
    pub fn new() -> Self {
        Self
    }

    pub async fn export_to_csv(&self, leads: &[EnrichedLead], filename: &str) -> Result<()> {
        if let Some(parent) = std::path::Path::new(filename).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::File::create(filename)?;

        writeln!(file, "Company,Website,Email,Ad URL,Ad Image,Keyword")?;

        for lead in leads {
            writeln!(
                file,
                "{},{},{},{},{},{}",
                csv_field(&lead.company),
                csv_field(&lead.website),
                csv_field(&lead.email),
                csv_field(lead.ad_url.as_deref().unwrap_or("")),
                csv_field(lead.ad_image.as_deref().unwrap_or("")),
                csv_field(&lead.keyword),
            )?;
        }

        Ok(())
    }

    pub fn generate_filename(&self, directory: &str) -> String {
        format!(
            "{}/leads_{}.csv",
            directory.trim_end_matches('/'),
            Utc::now().format("%Y%m%d_%H%M%S")
        )
    }

    pub fn print_stats(&self, stats: &RunStats) {
        println!("\n📊 Run Statistics:");
        println!("━━━━━━━━━━━━━━━━━━━━━");
        println!("  📥 Ads fetched: {}", stats.fetched);
        println!("  ✅ Leads processed: {}", stats.processed);
        println!("  🔁 Duplicate domains: {}", stats.duplicates);
        println!("  🚫 Social platform domains: {}", stats.blocked_social);
        println!("  ❓ No website found: {}", stats.no_website);
    }
}

/// Quotes a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
