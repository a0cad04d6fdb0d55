// src/io/reporting.rs

use crate::error::ReportError;
use crate::simulation::engine::DayRecord;
use std::path::Path;
use tracing::info;

/// Writes the day records to a CSV file, one row per day with a header.
pub fn write_simulation_log(path: impl AsRef<Path>, records: &[DayRecord]) -> Result<(), ReportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!(rows = records.len(), path = %path.display(), "Exported simulation log");
    Ok(())
}
