//! Article link discovery on a site's homepage.

use super::fetch_html;
use crate::config::SiteRules;
use crate::error::Result;
use itertools::Itertools;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

/// Fetch the homepage at `host` and return the raw article links on it.
///
/// # Arguments
///
/// * `client` - The HTTP client shared by the run
/// * `host` - The site's base URL, fetched as the homepage
/// * `rules` - Compiled selectors; `homepage_article_links` picks the anchors
///
/// # Returns
///
/// Links as written in the page (not yet resolved), in document order. A
/// failure to fetch the homepage is returned to the caller since there is
/// nothing left to scrape without it.
#[instrument(level = "info", skip(client, rules))]
pub async fn list_article_links(
    client: &Client,
    host: &str,
    rules: &SiteRules,
) -> Result<Vec<String>> {
    info!("Finding links in homepage");
    let html = fetch_html(client, host).await?;
    let links = extract_article_links(&html, &rules.homepage_article_links);

    info!(count = links.len(), "Indexed article links");
    debug!(?links, "Homepage links");
    Ok(links)
}

/// Collect the `href` of every element matching `selector`.
///
/// Elements without an `href` are ignored. Repeated links keep only their
/// first occurrence.
pub fn extract_article_links(html: &str, selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .unique()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{StubServer, homepage, sample_rules};

    #[test]
    fn test_extract_links_in_document_order() {
        let html = homepage(&["/a", "http://other.com/b/c", "rel/d"]);
        let rules = sample_rules();
        let links = extract_article_links(&html, &rules.homepage_article_links);
        assert_eq!(links, vec!["/a", "http://other.com/b/c", "rel/d"]);
    }

    #[test]
    fn test_extract_links_dedups_keeping_first() {
        let html = homepage(&["/b", "/a", "/b", "/c", "/a"]);
        let rules = sample_rules();
        let links = extract_article_links(&html, &rules.homepage_article_links);
        assert_eq!(links, vec!["/b", "/a", "/c"]);
    }

    #[test]
    fn test_extract_links_skips_anchors_without_href() {
        let html = r#"<ul>
            <li class="headline"><a name="top">No link</a></li>
            <li class="headline"><a href="/kept">Kept</a></li>
            <li class="sidebar"><a href="/ignored">Ignored</a></li>
        </ul>"#;
        let selector = Selector::parse(".headline a").unwrap();
        assert_eq!(extract_article_links(html, &selector), vec!["/kept"]);
    }

    #[test]
    fn test_extract_links_empty_page() {
        let selector = Selector::parse("a").unwrap();
        assert!(extract_article_links("<html></html>", &selector).is_empty());
    }

    #[tokio::test]
    async fn test_list_article_links_from_server() {
        let page = homepage(&["/one", "two"]);
        let server = StubServer::spawn(&[("/", 200, page.as_str())]);
        let client = super::super::build_client().unwrap();

        let links = list_article_links(&client, &server.base_url, &sample_rules())
            .await
            .unwrap();
        assert_eq!(links, vec!["/one", "two"]);
    }

    #[tokio::test]
    async fn test_list_article_links_homepage_error() {
        let server = StubServer::spawn(&[("/", 500, "boom")]);
        let client = super::super::build_client().unwrap();

        let result = list_article_links(&client, &server.base_url, &sample_rules()).await;
        assert!(result.is_err());
    }
}
