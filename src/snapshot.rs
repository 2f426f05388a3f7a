//! Registry snapshot persistence
//!
//! Parsed registries are cached as a JSON array of records so later runs
//! can rebuild the index without rescanning the bulk document.

use crate::error::{DartError, Result};
use crate::types::CompanyRecord;
use log::info;
use std::fs;
use std::path::Path;

/// Write a parsed registry to a pretty-printed JSON snapshot.
pub fn save_snapshot(records: &[CompanyRecord], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_vec_pretty(records)?;
    fs::write(&path, json)?;
    info!(
        "saved snapshot of {} records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Load a registry snapshot written by [`save_snapshot`].
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<CompanyRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DartError::Snapshot(format!(
            "snapshot not found: {}",
            path.display()
        )));
    }
    let data = fs::read(path)?;
    let records = serde_json::from_slice(&data)?;
    Ok(records)
}
