//! Small helpers for logging and the file system.

use crate::error::ExportError;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` characters are cut at a character boundary and
/// get `"…(+N bytes)"` appended, where `N` is the number of bytes dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Create `path` and any missing parents.
///
/// An existing directory is fine; anything else that stops the directory
/// from being created is returned to the caller.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_output_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| ExportError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Output directory ready");
    Ok(())
}
