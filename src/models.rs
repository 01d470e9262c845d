//! Data model for scraped articles.
//!
//! [`Article`] is the declared record schema: its field order is the CSV
//! column order, and the `csv` writer takes the header row from the field
//! names.

use serde::Serialize;

/// A single article parsed from a news site.
///
/// Columns are declared alphabetically: `body`, `date`, `title`, `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Main text of the article.
    pub body: String,
    /// Publication date as printed on the page, empty when the site has no
    /// date rule or the page did not match it.
    pub date: String,
    /// The article headline.
    pub title: String,
    /// The resolved URL the article was fetched from.
    pub url: String,
}

impl Article {
    /// Column names in export order.
    pub const COLUMNS: [&'static str; 4] = ["body", "date", "title", "url"];

    /// An article is only worth keeping when it has a body.
    pub fn is_valid(&self) -> bool {
        !self.body.trim().is_empty()
    }
}
