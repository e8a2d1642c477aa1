//! Implementation of the `tally analyze` command.

use crate::pipeline;
use crate::utils::read_source;
use anyhow::Result;
use std::io;
use std::path::Path;

/// Executes the `analyze` command, printing only the metrics line.
///
/// # Errors
/// Returns an error if the file cannot be read or fails analysis.
pub fn execute(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    let name = file.display().to_string();
    pipeline::report_pipeline(&source, &name, &mut io::stdout().lock())?;
    Ok(())
}
