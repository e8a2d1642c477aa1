//! Implementation of the `tally new` command.

use crate::utils::{print_status, write_project_files};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Executes the `new` command to create a new Tally project.
///
/// # Errors
/// Returns an error if the project directory already exists or if files cannot be created.
pub fn execute(name: &str) -> Result<()> {
    let project_dir = Path::new(name);

    if project_dir.exists() {
        anyhow::bail!("Directory '{name}' already exists");
    }

    fs::create_dir_all(project_dir)
        .with_context(|| format!("Failed to create directory '{name}'"))?;
    write_project_files(project_dir, name)?;

    print_status("Created", &format!("Tally project '{name}'"));
    println!();
    println!("To get started:");
    println!("  cd {name}");
    println!("  tally check");

    Ok(())
}
