//! Object-name list ingestion.

use std::path::Path;

use anyhow::{Context, Result};

/// Header of the column holding object names.
const NAME_COLUMN: &str = "Name";

/// Read the object names from the `Name` column of a CSV file.
///
/// Names are trimmed; empty cells are dropped. The list is fully
/// materialized, consumed once per run.
///
/// # Errors
///
/// Fails if the file cannot be read or the header has no `Name` column —
/// total input-list unavailability is the one fatal error of a run.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open name list {}", path.display()))?;

    let name_index = reader
        .headers()
        .context("failed to read CSV header")?
        .iter()
        .position(|h| h.trim() == NAME_COLUMN)
        .with_context(|| format!("name list has no '{NAME_COLUMN}' column"))?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to read CSV row")?;
        if let Some(cell) = record.get(name_index) {
            let name = cell.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}
