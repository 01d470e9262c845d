//! Output generation for scraped articles.
//!
//! - [`csv`]: writes a run's articles to a dated CSV file

pub mod csv;
