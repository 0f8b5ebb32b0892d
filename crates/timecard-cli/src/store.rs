//! File persistence for the serialized timecard.
//!
//! The on-disk format is exactly the core serialized form: one entry record
//! per line, epoch milliseconds. A missing file is an empty timecard.

use std::path::Path;

use anyhow::{Context, Result};

use timecard_core::Timecard;

/// Loads the timecard from `path`, or an empty one if the file is absent.
pub fn load(path: &Path) -> Result<Timecard> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no timecard file, starting empty");
        return Ok(Timecard::new());
    }

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Timecard::parse(&data).with_context(|| format!("invalid timecard data in {}", path.display()))
}

/// Writes the timecard back to `path`, creating parent directories.
pub fn save(path: &Path, timecard: &Timecard) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    std::fs::write(path, timecard.to_string())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = timecard.entries().len(), "saved timecard");
    Ok(())
}
