//! Command-line interface definitions.
//!
//! The only positional argument is the site identifier. Valid identifiers
//! come from the sites configuration file, so they are checked after the
//! file is loaded rather than by clap's own value parser.

use crate::config::{NewsConfig, SiteConfig};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// news_csv_scraper eluniversal
/// news_csv_scraper eluniversal --config sites.yaml --output-dir ./out
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The news site that you want to scrape
    pub news_site: String,

    /// Path to the sites configuration file
    #[arg(short, long, env = "NEWS_SCRAPER_CONFIG", default_value = "config.yaml")]
    pub config: PathBuf,

    /// Directory the CSV file is written to
    #[arg(short, long, default_value = "news")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Look up the requested site, or build a usage error listing the
    /// configured choices.
    pub fn validate_site<'a>(
        &self,
        config: &'a NewsConfig,
    ) -> Result<&'a SiteConfig, clap::Error> {
        config.site(&self.news_site).ok_or_else(|| {
            Cli::command().error(
                ErrorKind::InvalidValue,
                format!(
                    "invalid value '{}' for '<NEWS_SITE>' [possible values: {}]",
                    self.news_site,
                    config.site_ids().join(", ")
                ),
            )
        })
    }
}
