use crate::ExperimentRecord;
use anyhow::{anyhow, Result};
use knapbench_utils::write_atomic;
use log::{info, warn};
use std::path::Path;

/// Writes a header row followed by one row per record, in order. The file is replaced
/// atomically; an empty batch leaves the filesystem untouched.
pub fn export_csv(path: &Path, records: &[ExperimentRecord]) -> Result<()> {
    if records.is_empty() {
        warn!("No experiment records to export");
        return Ok(());
    }

    write_atomic(path, |w| {
        let mut writer = csv::Writer::from_writer(w);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    })?;
    info!("Exported {} records to '{}'", records.len(), path.display());
    Ok(())
}

pub fn load_csv(path: &Path) -> Result<Vec<ExperimentRecord>> {
    if !path.exists() {
        return Err(anyhow!(
            "Results file '{}' not found. Run `knapbench run` first",
            path.display()
        ));
    }
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<ExperimentRecord>, csv::Error>>()
        .map_err(|e| anyhow!("Failed to parse '{}': {}", path.display(), e))?;
    info!("Loaded {} records from '{}'", records.len(), path.display());
    Ok(records)
}
