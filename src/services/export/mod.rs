//! Result set persistence helpers.
//!
//! Free functions that write query results to CSV or JSON files, read them
//! back, load SQL text from disk and clear out previous exports.

mod csv_file;
mod files;
mod json_file;

use anyhow::{Context, Result};
use std::path::Path;

pub use csv_file::{from_csv, to_csv};
pub use files::{clear_all_results, get_query_from_file};
pub use json_file::{from_json, to_json};

/// Create `dir` if it does not exist yet.
///
/// Only the last path component is created; a missing parent is an error.
/// An empty path means the current directory and is left alone.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    std::fs::create_dir(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    tracing::debug!("Created directory {}", dir.display());
    Ok(())
}
