//! # News CSV Scraper
//!
//! Scrapes the articles linked from a configured news site's homepage and
//! saves them as a dated CSV file.
//!
//! ## Usage
//!
//! ```sh
//! news_csv_scraper eluniversal --config config.yaml --output-dir ./news
//! ```
//!
//! ## Pipeline
//!
//! 1. **Configuration**: load the sites file and check the requested site
//! 2. **Listing**: collect article links from the site's homepage
//! 3. **Fetching**: download and parse each article in turn, skipping
//!    failures and articles without a body
//! 4. **Output**: write `<site>_<YYYY_MM_DD>_articles.csv`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod runner;
mod scrapers;
#[cfg(test)]
mod test_helpers;
mod utils;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match config::load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %args.config.display(), error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    let site = args.validate_site(&config).unwrap_or_else(|e| e.exit());

    let path = match runner::run(&args.news_site, site, &args.output_dir).await {
        Ok(path) => path,
        Err(e) => {
            error!(site = %args.news_site, error = %e, "Scraper run failed");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        path = %path.display(),
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
