//! Binary snapshot of parsed cast records
//!
//! The snapshot only memoizes parsing; analytics never depend on it.

use crate::data::tsv::{load_cast_records, InputPaths};
use crate::data::CastRecords;
use anyhow::Result;
use log;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn save_snapshot(records: &CastRecords, path: &Path) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, records)?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<CastRecords> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Use the snapshot when it decodes, otherwise parse the inputs and
/// rewrite the snapshot
pub fn load_or_parse(paths: &InputPaths<'_>, snapshot: &Path) -> Result<CastRecords> {
    if snapshot.exists() {
        match load_snapshot(snapshot) {
            Ok(records) => {
                log::info!("Read cast records from snapshot {}", snapshot.display());
                return Ok(records);
            }
            Err(e) => log::warn!("Ignoring unreadable snapshot {}: {}", snapshot.display(), e),
        }
    }

    let records = load_cast_records(paths)?;
    if let Err(e) = save_snapshot(&records, snapshot) {
        log::warn!("Could not write snapshot {}: {}", snapshot.display(), e);
    }
    Ok(records)
}
