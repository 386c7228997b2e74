use models::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod dedup;
mod export;
mod extractor;
mod models;
mod orchestrator;
mod sources;
mod web_crawler;

use config::{load_config, Config};
use dialoguer::{theme::ColorfulTheme, Input};
use export::LeadExporter;
use orchestrator::Orchestrator;
use sources::{AdSource, JsonFileSource};
use tokio::signal;
use web_crawler::EmailCrawler;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    let directive = format!("ad_lead_scraper={}", config.logging.level).parse()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_max_level(tracing::Level::INFO)
        .init();

    // Create output directory
    tokio::fs::create_dir_all(&config.output.directory).await?;

    tokio::select! {
        result = run_pipeline(&config) => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}

async fn run_pipeline(config: &Config) -> Result<()> {
    println!("🚀 Starting Lead Generation System...");

    let keyword: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Keyword")
        .default(config.search.default_keyword.clone())
        .interact_text()?;

    let ads_path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Path to ad records JSON")
        .default("ads.json".to_string())
        .interact_text()?;

    let source = JsonFileSource::new(ads_path);
    let ads = source
        .fetch_ads(
            &keyword,
            &config.search.default_country,
            config.search.max_results,
        )
        .await?;

    if ads.is_empty() {
        println!("⚠️ No ads found. Exiting.");
        return Ok(());
    }

    let crawler = EmailCrawler::new(&config.crawl);
    let orchestrator = Orchestrator::new(crawler);
    let (leads, stats) = orchestrator.run(&ads, &keyword).await;

    let exporter = LeadExporter::new();
    if leads.is_empty() {
        println!("⚠️ No valid leads extracted.");
    } else {
        let filename = exporter.generate_filename(&config.output.directory);
        exporter.export_to_csv(&leads, &filename).await?;
        println!("✅ Saved {} leads to {}", leads.len(), filename);
    }

    exporter.print_stats(&stats);

    Ok(())
}
