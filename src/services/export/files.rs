//! Query file loading and result directory cleanup.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Extensions `clear_all_results` treats as exported results.
const RESULT_EXTENSIONS: [&str; 2] = ["csv", "json"];

/// Read the full text of `{dest_dir}/{file_name}`, typically a SQL script.
pub fn get_query_from_file(dest_dir: impl AsRef<Path>, file_name: &str) -> Result<String> {
    let path = dest_dir.as_ref().join(file_name);
    fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Delete the exported results directly inside `dest_dir`.
///
/// Only regular files whose extension (after the last `.`, any case; the
/// whole name if there is no `.`) is `csv` or `json` are removed.
/// Subdirectories are neither removed nor descended into. Returns the number of files deleted.
pub fn clear_all_results(dest_dir: impl AsRef<Path>) -> Result<usize> {
    let dest_dir = dest_dir.as_ref();
    let entries = fs::read_dir(dest_dir)
        .with_context(|| format!("Failed to list {}", dest_dir.display()))?;

    let mut removed = 0;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_result_file(&path) {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            tracing::debug!("Removed {}", path.display());
            removed += 1;
        }
    }

    Ok(removed)
}

fn is_result_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    // the last dot-separated segment, or the whole name when there is no dot
    name.rsplit('.')
        .next()
        .is_some_and(|ext| RESULT_EXTENSIONS.iter().any(|r| ext.eq_ignore_ascii_case(r)))
}
