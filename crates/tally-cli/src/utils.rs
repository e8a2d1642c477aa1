//! Utility functions and constants shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tally_utils::Config;

/// Template for main.tly file in new projects.
pub const MAIN_TALLY_TEMPLATE: &str = r"// Sum the positive entries of a list.
listnum values;
num total;
bool positive;

total = 0;
foreach (num value : values) {
    positive = value > 0;
    if (positive) {
        total = total + value;
    }
}
";

/// Finds the Tally project root and config.
///
/// # Errors
/// Returns an error if not in a Tally project directory.
pub fn find_project() -> Result<(Config, PathBuf)> {
    Config::find().with_context(|| "Not in a Tally project directory")
}

/// Reads a source file.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes the project skeleton (config plus entry file) into `project_dir`.
///
/// An existing entry file is left untouched.
///
/// # Errors
/// Returns an error if any file or directory cannot be created.
pub fn write_project_files(project_dir: &Path, name: &str) -> Result<()> {
    let config = Config::new(name);
    let entry = project_dir.join(&config.analysis.entry);

    if let Some(parent) = entry.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    config.save(project_dir.join(tally_utils::config::CONFIG_FILE))?;

    if !entry.exists() {
        fs::write(&entry, MAIN_TALLY_TEMPLATE)
            .with_context(|| format!("Failed to create {}", entry.display()))?;
    }

    Ok(())
}

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Prints a status message with project info.
pub fn print_project_status(status: &str, config: &Config, path: &Path) {
    println!(
        "{} {} v{} ({})",
        status.green().bold(),
        config.package.name,
        config.package.version,
        path.display()
    );
}
