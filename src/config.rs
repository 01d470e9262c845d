//! Sites configuration loaded from YAML.
//!
//! Each configured site carries its base URL and the CSS selectors used to
//! pull article links off the homepage and fields out of each article page.
//!
//! ```yaml
//! news_sites:
//!   eluniversal:
//!     url: https://www.eluniversal.com.mx
//!     queries:
//!       homepage_article_links: ".field-content a"
//!       article_body: ".field-name-body"
//!       article_title: ".pane-content h1"
//!       article_date: ".fecha"
//! ```

use crate::error::ConfigError;
use scraper::Selector;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument};
use url::Url;

/// Top-level configuration: site identifier -> site definition.
#[derive(Debug, Deserialize)]
pub struct NewsConfig {
    pub news_sites: BTreeMap<String, SiteConfig>,
}

/// A single configured news site.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the site. Used verbatim as the host for link resolution.
    pub url: String,
    pub queries: SiteQueries,
}

/// Raw CSS selector strings for a site.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteQueries {
    pub homepage_article_links: String,
    pub article_body: String,
    pub article_title: String,
    #[serde(default)]
    pub article_date: Option<String>,
}

/// Compiled selectors for a site, ready to run against parsed documents.
#[derive(Debug)]
pub struct SiteRules {
    pub homepage_article_links: Selector,
    pub article_body: Selector,
    pub article_title: Selector,
    pub article_date: Option<Selector>,
}

impl NewsConfig {
    /// Parse a configuration from YAML text.
    ///
    /// Sites are not checked here; see [`SiteConfig::validate`].
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Configured site identifiers, sorted.
    pub fn site_ids(&self) -> Vec<&str> {
        self.news_sites.keys().map(String::as_str).collect()
    }

    pub fn site(&self, site_id: &str) -> Option<&SiteConfig> {
        self.news_sites.get(site_id)
    }
}

impl SiteConfig {
    /// Check the site's URL and compile its selectors.
    ///
    /// Only the site being scraped is validated, so a broken entry for some
    /// other site does not stop this one from running.
    ///
    /// # Arguments
    ///
    /// * `site_id` - The identifier this site is configured under, used in errors
    ///
    /// # Returns
    ///
    /// The compiled [`SiteRules`], or [`ConfigError::InvalidUrl`] /
    /// [`ConfigError::InvalidSelector`].
    pub fn validate(&self, site_id: &str) -> Result<SiteRules, ConfigError> {
        self.validate_url(site_id)?;
        self.rules(site_id)
    }

    fn validate_url(&self, site_id: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidUrl {
            site: site_id.to_string(),
            url: self.url.clone(),
        };
        let parsed = Url::parse(&self.url).map_err(|_| invalid())?;
        match parsed.scheme() {
            "http" | "https" if parsed.has_host() => Ok(()),
            _ => Err(invalid()),
        }
    }

    fn rules(&self, site_id: &str) -> Result<SiteRules, ConfigError> {
        let compile = |query: &'static str, css: &str| {
            Selector::parse(css).map_err(|e| ConfigError::InvalidSelector {
                site: site_id.to_string(),
                query,
                reason: e.to_string(),
            })
        };

        let q = &self.queries;
        Ok(SiteRules {
            homepage_article_links: compile(
                "homepage_article_links",
                &q.homepage_article_links,
            )?,
            article_body: compile("article_body", &q.article_body)?,
            article_title: compile("article_title", &q.article_title)?,
            article_date: q
                .article_date
                .as_deref()
                .map(|css| compile("article_date", css))
                .transpose()?,
        })
    }
}

/// Read and parse the sites configuration file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<NewsConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = NewsConfig::from_yaml(&text)?;
    info!(sites = config.news_sites.len(), "Loaded configuration");
    debug!(site_ids = ?config.site_ids(), "Configured sites");
    Ok(config)
}
