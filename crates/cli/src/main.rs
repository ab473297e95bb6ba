//! wxscrape command-line entry point.
//!
//! Records go to stdout as JSON. Logging goes to stderr so the output can be piped
//! straight into other tools.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wxscrape_client::{Document, FetchClient, FetchConfig, PROVIDER_TZ, SiteScraper, forecast};
use wxscrape_core::AppConfig;

#[derive(Parser)]
#[command(name = "wxscrape", version)]
#[command(about = "Extract hourly and ten-day forecasts from a weather provider's homepage")]
struct Cli {
    /// Registered site to fetch
    #[arg(long, default_value = "wowt")]
    site: String,

    /// Read a saved page instead of fetching the site
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Next 12 hours, nearest first
    Hourly,
    /// Next 10 days, nearest first
    TenDay,
    /// List configured sites
    Sites,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let recorded = Utc::now().with_timezone(&PROVIDER_TZ);

    match cli.command {
        Command::Sites => print_json(&config.sites),
        Command::Hourly => {
            let entries = match &cli.file {
                Some(path) => forecast::hourly_from_document(&load_file(path)?, &recorded)?,
                None => scraper(&config)?.hourly(&cli.site, &recorded).await?,
            };
            report("hourly", &cli, &recorded, entries.len());
            print_json(&entries)
        }
        Command::TenDay => {
            let entries = match &cli.file {
                Some(path) => forecast::ten_day_from_document(&load_file(path)?, &recorded)?,
                None => scraper(&config)?.ten_day(&cli.site, &recorded).await?,
            };
            report("ten_day", &cli, &recorded, entries.len());
            print_json(&entries)
        }
    }
}

fn scraper(config: &AppConfig) -> Result<SiteScraper<FetchClient>> {
    let client = FetchClient::new(FetchConfig::from(config))?;
    Ok(SiteScraper::new(config.sites.clone(), client))
}

fn load_file(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Document::from_bytes(&bytes)?)
}

fn report(kind: &str, cli: &Cli, recorded: &DateTime<Tz>, count: usize) {
    let source = cli.file.as_ref().map_or_else(|| cli.site.clone(), |p| p.display().to_string());
    tracing::info!(kind, source = %source, recorded = %recorded, count, "scrape complete");
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
