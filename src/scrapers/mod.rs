//! Fetching and parsing of a configured news site.
//!
//! A site is scraped in two phases:
//!
//! 1. **Listing**: fetch the homepage and collect article links ([`homepage`])
//! 2. **Fetching**: resolve each link ([`links`]), download and parse the
//!    article ([`article`]), keeping only articles with a body
//!
//! Articles are fetched strictly one after another, in listing order. A
//! failed or empty article is logged and skipped; it never stops the run.

pub mod article;
pub mod homepage;
pub mod links;

use crate::config::SiteRules;
use crate::error::Result;
use crate::models::Article;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by every request in a run.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET a page and return its body, treating non-2xx statuses as errors.
#[instrument(level = "debug", skip(client))]
pub(crate) async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(body)
}

/// Fetch every linked article in order, keeping the valid ones.
///
/// Network failures and articles without a body are logged and skipped.
#[instrument(level = "info", skip_all, fields(%host, links = links.len()))]
pub async fn fetch_articles(
    client: &Client,
    host: &str,
    links: Vec<String>,
    rules: &SiteRules,
) -> Vec<Article> {
    let total = links.len();
    let articles: Vec<Article> = stream::iter(links)
        .then(|link| async move {
            info!(%link, "Start fetching article");
            match article::fetch_article(client, host, &link, rules).await {
                Ok(Some(article)) => {
                    info!(
                        url = %article.url,
                        title = %truncate_for_log(&article.title, 80),
                        "Article fetched"
                    );
                    Some(article)
                }
                Ok(None) => {
                    warn!(%link, "Invalid article. There is no body");
                    None
                }
                Err(e) => {
                    warn!(%link, error = %e, "Error while fetching article");
                    None
                }
            }
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(
        fetched = articles.len(),
        skipped = total - articles.len(),
        "Finished fetching articles"
    );
    articles
}
