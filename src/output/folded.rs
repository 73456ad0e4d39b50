//! Folded stack output writer.
//!
//! The folded file is the exact text handed to the renderer, useful for
//! feeding other flamegraph tools.

use super::{ensure_parent_dir, validate_path};
use crate::folder::FoldedStack;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write folded stack lines to a file
pub fn write_folded(stacks: &[FoldedStack], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing folded stacks to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    for stack in stacks {
        writer.write_all(stack.to_line().as_bytes()).map_err(OutputError::WriteFailed)?;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Folded stacks written ({} lines)", stacks.len());
    Ok(())
}
