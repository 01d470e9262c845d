//! Resolution of homepage links into fetchable article URLs.

use once_cell::sync::Lazy;
use regex::Regex;

// `(?s)` lets `.` cross newlines: hrefs keep whatever whitespace the markup had.

/// e.g. `https://www.somesite.com/something`
static WELL_FORMED_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^https?://.+/.+$").unwrap());

/// e.g. `/some-text`
static ROOT_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^/.+$").unwrap());

/// Turn a link found on the homepage into a fully-qualified URL.
///
/// - Absolute `http(s)` URLs with a path are returned unchanged.
/// - Root-relative paths are appended to `host` as-is.
/// - Anything else is joined to `host` with a single `/`.
///
/// `host` is never normalized, so a host ending in `/` combined with a bare
/// path yields a double slash. An empty link resolves to `host + "/"`.
pub fn resolve(host: &str, link: &str) -> String {
    if WELL_FORMED_URL.is_match(link) {
        link.to_string()
    } else if ROOT_PATH.is_match(link) {
        format!("{host}{link}")
    } else {
        format!("{host}/{link}")
    }
}
