//! JSON export and import of result sets.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::services::database::traits::Record;

/// Write `records` to `{dest_dir}/{dest_file_name}.json` as an array of
/// objects indented by four spaces.
///
/// Unlike `to_csv`, an empty input still writes a file containing `[]`,
/// and `dest_dir` must already exist.
pub fn to_json(
    dest_dir: impl AsRef<Path>,
    dest_file_name: &str,
    records: &[Record],
) -> Result<PathBuf> {
    let path = dest_dir.as_ref().join(format!("{}.json", dest_file_name));
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(path)
}

/// Read a JSON array of objects from `{dest_dir}/{dest_file_name}`.
///
/// The caller supplies the extension. Column order follows the file.
pub fn from_json(dest_dir: impl AsRef<Path>, dest_file_name: &str) -> Result<Vec<Record>> {
    let path = dest_dir.as_ref().join(dest_file_name);
    let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;

    let records = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(records)
}
