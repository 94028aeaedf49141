// src/export/sink.rs

use crate::errors::AppResult;
use crate::export::model::PayrollExport;
use crate::models::payroll_entry::PayrollEntry;
use std::fs::OpenOptions;
use std::path::Path;

/// Append one finalized entry to the CSV export sink.
///
/// The header row is written only when the file does not exist yet. The file
/// is opened, written, flushed and closed within this call.
pub fn append_entry(path: &Path, entry: &PayrollEntry) -> AppResult<()> {
    let write_header = !path.exists();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);

    wtr.serialize(PayrollExport::from(entry))?;
    wtr.flush()?;
    Ok(())
}
