//! CSV export and import of result sets.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use super::ensure_dir;
use crate::services::database::traits::{Record, Value};

/// Write `records` to `{dest_dir}/{dest_file_name}.csv`.
///
/// The header comes from the key order of the first record. A record missing
/// one of the header columns gets an empty field; a record with a column the
/// header does not have is an error.
///
/// Returns the written path, or `None` when `records` is empty: no file is
/// created in that case.
pub fn to_csv(
    dest_dir: impl AsRef<Path>,
    dest_file_name: &str,
    records: &[Record],
) -> Result<Option<PathBuf>> {
    let dest_dir = dest_dir.as_ref();
    ensure_dir(dest_dir)?;

    let Some(first) = records.first() else {
        tracing::debug!("No rows for {}, skipping CSV export", dest_file_name);
        return Ok(None);
    };

    let header: Vec<&str> = first.keys().collect();
    let path = dest_dir.join(format!("{}.csv", dest_file_name));
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(&header)?;
    for (row_idx, record) in records.iter().enumerate() {
        if let Some(extra) = record.keys().find(|key| !header.contains(key)) {
            bail!(
                "Row {} has column `{}` which is not in the CSV header",
                row_idx,
                extra
            );
        }
        writer.write_record(header.iter().map(|column| {
            record
                .get(column)
                .map(Value::to_field_string)
                .unwrap_or_default()
        }))?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(Some(path))
}

/// Read `{dest_dir}/{dest_file_name}` back into records.
///
/// The caller supplies the extension. Every value comes back as `Value::Text`;
/// types written by `to_csv` are not recovered. Rows shorter than the header
/// get `Value::Null` for the missing columns.
pub fn from_csv(dest_dir: impl AsRef<Path>, dest_file_name: &str) -> Result<Vec<Record>> {
    let path = dest_dir.as_ref().join(dest_file_name);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(idx, column)| (column, row.get(idx).map(Value::from).unwrap_or_default()))
            .collect();
        records.push(record);
    }

    Ok(records)
}
