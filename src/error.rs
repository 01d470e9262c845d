//! Error types for configuration, scraping, and export.
//!
//! Per-article failures never surface through these types at the run level:
//! the orchestrator logs and skips them. Everything that does reach `main`
//! aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Problems with the sites configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("site '{site}' has an invalid url '{url}': expected an absolute http(s) URL")]
    InvalidUrl { site: String, url: String },

    #[error("site '{site}' has an invalid selector for '{query}': {reason}")]
    InvalidSelector {
        site: String,
        query: &'static str,
        reason: String,
    },
}

/// Fatal problems while writing the CSV output.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no valid articles collected for site '{site}'; refusing to write an empty export")]
    NoArticles { site: String },

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the scraping pipeline.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
