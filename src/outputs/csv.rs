//! CSV export of a run's articles.
//!
//! One file per site and calendar day:
//! ```text
//! output_dir/
//! └── eluniversal_2025_05_06_articles.csv
//! ```
//!
//! Running again on the same day replaces the file.

use crate::error::ExportError;
use crate::models::Article;
use crate::utils::ensure_output_dir;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// File name for a site's export on `date`: `<site>_<YYYY_MM_DD>_articles.csv`.
pub fn output_file_name(site_id: &str, date: NaiveDate) -> String {
    format!("{}_{}_articles.csv", site_id, date.format("%Y_%m_%d"))
}

/// Write `articles` to the site's CSV file for today's local date.
pub async fn write_articles_today(
    site_id: &str,
    articles: &[Article],
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    write_articles(site_id, articles, output_dir, Local::now().date_naive()).await
}

/// Write `articles` to `<output_dir>/<site>_<date>_articles.csv`.
///
/// The header row comes from [`Article`]'s declared columns, followed by one
/// row per article in the order given.
///
/// # Arguments
///
/// * `site_id` - The site identifier, used as the file name prefix
/// * `articles` - The valid articles collected during the run
/// * `output_dir` - Directory to write into; created if missing
/// * `date` - Calendar date used in the file name
///
/// # Returns
///
/// The path of the written file. Records end with `\r\n`.
///
/// # Errors
///
/// - [`ExportError::NoArticles`] if `articles` is empty; nothing is written.
/// - [`ExportError::CreateDir`] if the output directory cannot be created.
/// - [`ExportError::Csv`] / [`ExportError::Write`] on serialization or I/O failure.
#[instrument(
    level = "info",
    skip(articles, output_dir),
    fields(count = articles.len(), output_dir = %output_dir.display())
)]
pub async fn write_articles(
    site_id: &str,
    articles: &[Article],
    output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    if articles.is_empty() {
        return Err(ExportError::NoArticles {
            site: site_id.to_string(),
        });
    }

    ensure_output_dir(output_dir).await?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    for article in articles {
        writer.serialize(article)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    let path = output_dir.join(output_file_name(site_id, date));
    info!(path = %path.display(), columns = ?Article::COLUMNS, "Writing CSV");
    fs::write(&path, bytes)
        .await
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
    info!(path = %path.display(), rows = articles.len(), "Wrote articles CSV");

    Ok(path)
}
