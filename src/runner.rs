//! One scraping run for one site: list links, fetch each article, export.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::outputs::csv::write_articles_today;
use crate::scrapers::{build_client, fetch_articles, homepage::list_article_links};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Scrape `site` and write its articles under `output_dir`.
///
/// # Arguments
///
/// * `site_id` - The configured identifier of the site
/// * `site` - The site's configuration; validated before any request is made
/// * `output_dir` - Directory the CSV file is written to
///
/// # Returns
///
/// The path of the CSV file written. Per-article failures are skipped; an
/// invalid site entry, a homepage failure, an empty result, or an export
/// failure aborts the run.
#[instrument(level = "info", skip(site, output_dir), fields(host = %site.url))]
pub async fn run(site_id: &str, site: &SiteConfig, output_dir: &Path) -> Result<PathBuf> {
    let host = site.url.as_str();
    let rules = site.validate(site_id)?;
    let client = build_client()?;

    info!(%host, "Beginning scraper");
    let links = list_article_links(&client, host, &rules).await?;
    let articles = fetch_articles(&client, host, links, &rules).await;

    let path = write_articles_today(site_id, &articles, output_dir).await?;
    info!(path = %path.display(), articles = articles.len(), "Run complete");
    Ok(path)
}
