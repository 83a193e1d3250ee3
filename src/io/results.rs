//! Aggregate-result export.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AggregateResult;

/// Write the aggregated dataset as CSV: one row per retained target, in
/// iteration order, with the two correlated columns.
pub fn write_results(path: &Path, results: &[AggregateResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;

    writer
        .write_record(["total_weighted_luminosity", "target_velocity_km_s"])
        .context("failed to write CSV header")?;

    for result in results {
        writer
            .write_record([
                result.total_weighted_luminosity.to_string(),
                result.target_velocity_km_s.to_string(),
            ])
            .with_context(|| format!("failed to write row for {}", result.target_name))?;
    }

    writer.flush().context("failed to flush output file")?;
    Ok(())
}
