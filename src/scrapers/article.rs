//! Fetching and parsing of a single article page.

use super::fetch_html;
use super::links::resolve;
use crate::config::SiteRules;
use crate::error::Result;
use crate::models::Article;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Fetch the article behind `link` and parse it with the site's rules.
///
/// # Arguments
///
/// * `client` - The HTTP client shared by the run
/// * `host` - The site's base URL, used to resolve relative links
/// * `link` - A link as found on the homepage (absolute, root-relative, or bare)
/// * `rules` - The site's compiled selectors
///
/// # Returns
///
/// `Ok(Some(article))` for a page with body text, `Ok(None)` when the page
/// was fetched but has no body, and `Err` when the request itself failed or
/// returned an error status.
#[instrument(level = "info", skip(client, rules))]
pub async fn fetch_article(
    client: &Client,
    host: &str,
    link: &str,
    rules: &SiteRules,
) -> Result<Option<Article>> {
    let url = resolve(host, link);
    debug!(%url, "Resolved article link");

    let html = fetch_html(client, &url).await?;
    let article = parse_article(&html, &url, rules);

    if !article.is_valid() {
        return Ok(None);
    }
    Ok(Some(article))
}

/// Extract an [`Article`] from an article page.
///
/// Each field takes the text of the first element its selector matches;
/// fields with no match are left empty.
pub fn parse_article(html: &str, url: &str, rules: &SiteRules) -> Article {
    let document = Html::parse_document(html);

    Article {
        body: first_text(&document, &rules.article_body),
        date: rules
            .article_date
            .as_ref()
            .map(|selector| first_text(&document, selector))
            .unwrap_or_default(),
        title: first_text(&document, &rules.article_title),
        url: url.to_string(),
    }
}

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
