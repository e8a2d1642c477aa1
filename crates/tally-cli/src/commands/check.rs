//! Implementation of the `tally check` command.

use crate::project::Project;
use anyhow::Result;

/// Executes the `check` command on the project's entry file.
///
/// # Errors
/// Returns an error if the project cannot be found or fails analysis.
pub fn execute() -> Result<()> {
    let project = Project::find()?;
    project.check_verbose()?;
    Ok(())
}
