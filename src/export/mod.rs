//! Native JSON export
//!
//! Exports the complete AppData blob as pretty-printed JSON. The exported
//! document has the same shape as the persisted blob, so it round-trips
//! exactly through the import path with no transformation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::AppData;

/// Write the export document to a writer
pub fn export_json<W: Write>(data: &AppData, writer: &mut W) -> PocketbookResult<()> {
    serde_json::to_writer_pretty(&mut *writer, data)
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}

/// Write the export document to a file path
pub fn export_to_path<P: AsRef<Path>>(data: &AppData, path: P) -> PocketbookResult<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        PocketbookError::Export(format!(
            "Failed to create {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    export_json(data, &mut writer)
}
