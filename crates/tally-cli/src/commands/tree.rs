//! Implementation of the `tally tree` command.

use crate::pipeline;
use crate::utils::read_source;
use anyhow::Result;
use std::path::Path;

/// Executes the `tree` command, printing the parsed syntax tree.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn execute(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    let dump = pipeline::tree_pipeline(&source, &file.display().to_string())?;
    print!("{dump}");
    Ok(())
}
