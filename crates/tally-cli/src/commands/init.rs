//! Implementation of the `tally init` command.

use crate::utils::{print_status, write_project_files};
use anyhow::{Context, Result};
use tally_utils::config::CONFIG_FILE;

/// Executes the `init` command to initialize a Tally project in the current directory.
///
/// # Errors
/// Returns an error if tally.toml already exists or if files cannot be created.
pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

    if current_dir.join(CONFIG_FILE).exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in current directory");
    }

    let project_name = current_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("tally-project");

    write_project_files(&current_dir, project_name)?;

    print_status("Created", &format!("Tally project '{project_name}'"));
    println!();
    println!("To get started:");
    println!("  tally check");

    Ok(())
}
