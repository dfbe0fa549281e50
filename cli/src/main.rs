//! Corkboard - classifieds search from the command line.
//!
//! Runs a query against a classifieds site, crawls every page of results,
//! and prints one JSON record per listing on stdout. Logs go to stderr.

mod config;
mod error;
mod fetcher;

use anyhow::Context;
use clap::Parser;
use config::AppConfig;
use corkboard_search::{SearchCrawler, SearchFilters, SearchType};
use fetcher::HttpFetcher;
use tracing::info;

/// Search classifieds listings and print matches as JSON lines.
#[derive(Debug, Parser)]
#[command(name = "corkboard", version, about)]
struct Cli {
    /// Search query
    #[arg(required_unless_present = "save_config")]
    query: Option<String>,

    /// Site base URL, e.g. https://portland.craigslist.org/
    #[arg(long)]
    location: Option<String>,

    /// Category code (sss, jjj, ggg, bbb, hhh, ...)
    #[arg(long)]
    category: Option<String>,

    /// Match all post text (A) or titles only (T)
    #[arg(long, default_value = "A")]
    search_type: String,

    /// Drop housing results priced at or below this value
    #[arg(long)]
    min_price: Option<f64>,

    /// Drop housing results priced at or above this value
    #[arg(long)]
    max_price: Option<f64>,

    /// Drop housing results with this many bedrooms or fewer
    #[arg(long)]
    min_rooms: Option<u32>,

    /// Drop housing results with this many bedrooms or more
    #[arg(long)]
    max_rooms: Option<u32>,

    /// Stop after this many result pages
    #[arg(long)]
    max_pages: Option<usize>,

    /// Write the merged configuration to the config file and exit
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Bounds from the command line, or `None` when no bound was given.
    fn filters(&self) -> Option<SearchFilters> {
        if self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rooms.is_none()
            && self.max_rooms.is_none()
        {
            return None;
        }

        Some(SearchFilters {
            min_price: self.min_price,
            max_price: self.max_price,
            min_rooms: self.min_rooms,
            max_rooms: self.max_rooms,
        })
    }
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,corkboard=debug,corkboard_search=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::load_with_env().context("loading configuration")?;

    info!("Starting Corkboard v{}", env!("CARGO_PKG_VERSION"));

    let search_type: SearchType = cli.search_type.parse()?;
    let filters = cli.filters();

    if let Some(location) = cli.location {
        config.search.location = location;
    }
    if let Some(category) = cli.category {
        config.search.category = category;
    }
    if cli.max_pages.is_some() {
        config.search.max_pages = cli.max_pages;
    }

    if cli.save_config {
        config.save().context("saving configuration")?;
        let path = AppConfig::config_path().context("resolving config path")?;
        info!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let query = match cli.query {
        Some(query) => query,
        None => anyhow::bail!("a search query is required"),
    };

    let fetcher = HttpFetcher::new(&config.http).context("building HTTP client")?;
    let mut crawler = SearchCrawler::new(fetcher);
    if let Some(max) = config.search.max_pages {
        crawler = crawler.with_max_pages(max);
    }

    let records = crawler.search(
        &config.search.location,
        &config.search.category,
        &query,
        search_type,
        filters.as_ref(),
    )?;

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    info!(records = records.len(), "search complete");

    Ok(())
}
