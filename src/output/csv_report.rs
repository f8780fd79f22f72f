//! CSV product report
//!
//! One header row followed by one row per product, list-valued fields
//! joined with ", ".

use crate::output::traits::OutputResult;
use crate::state::ProductRecord;
use std::io::Write;
use std::path::Path;

/// Writes the product report to `path`, replacing any existing file
pub fn write_report(path: &Path, records: &[ProductRecord]) -> OutputResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    write_report_to(file, records)
}

/// Writes the product report to any writer
pub fn write_report_to<W: Write>(writer: W, records: &[ProductRecord]) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(ProductRecord::HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }

    writer.flush()?;
    Ok(())
}
