//! JSON usage report writer.

use super::schema::UsageReport;
use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a usage report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &UsageReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Report written successfully ({} directories)", report.top_directories.len());

    Ok(())
}

/// Read a usage report back from disk
pub fn read_report(input_path: impl AsRef<Path>) -> Result<UsageReport, OutputError> {
    let file = File::open(input_path.as_ref()).map_err(OutputError::ReadFailed)?;
    let report = serde_json::from_reader(BufReader::new(file))?;
    Ok(report)
}
