mod config;
mod error;
mod harvest;
mod models;
mod parsing;
mod pipeline;
mod scrapers;
mod store;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{ScoutConfig, SourceKind};
use pipeline::Pipeline;
use scrapers::{ChromeSource, HttpSource, PageSource};
use store::JsonStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Harvest and extract real estate listings
#[derive(Debug, Parser)]
#[command(name = "emlak-scout", version)]
struct Cli {
    #[command(flatten)]
    config: ScoutConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Walk the paginated index from a seed URL and save every listing link
    Links {
        /// First index page
        #[arg(long, env = "SCOUT_SEED_URL")]
        link: Option<String>,
    },
    /// Extract listing records, from one link or from the saved link list
    Items {
        /// Single detail page; the saved link list is used when omitted
        #[arg(long)]
        link: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    info!("🏠 Emlak Scout");
    info!("Source: {:?}, data dir: {}", cli.config.source, cli.config.data_dir.display());

    // The source (and any browser behind it) is dropped when this returns,
    // whether the run succeeded or not.
    let source: Box<dyn PageSource> = match cli.config.source {
        SourceKind::Chrome => Box::new(ChromeSource::new(&cli.config).context("Failed to launch Chrome browser")?),
        SourceKind::Http => Box::new(HttpSource::new(&cli.config).context("Failed to create HTTP client")?),
    };
    let store = JsonStore::new(&cli.config.data_dir);
    let pipeline = Pipeline::new(source.as_ref(), &store).with_max_pages(cli.config.max_pages);

    let report = match &cli.command {
        Command::Links { link } => pipeline.collect_links(link.as_deref()).await?,
        Command::Items { link } => pipeline.collect_items(link.as_deref()).await?,
    };

    info!("✅ {} ({} entries) -> {}", report.message, report.count, report.file_path);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
