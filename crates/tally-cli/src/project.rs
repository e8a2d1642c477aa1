//! Project-level analysis driven by `tally.toml`.

use crate::pipeline;
use crate::utils::{find_project, print_project_status, read_source};
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tally_semantic::Metrics;
use tally_utils::Config;
use tally_utils::config::CONFIG_FILE;

/// A Tally project rooted at the directory holding its `tally.toml`.
pub struct Project {
    project_root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens the project at `project_root`.
    ///
    /// # Errors
    /// Returns an error if the project configuration cannot be loaded.
    pub fn new(project_root: PathBuf) -> Result<Self> {
        let config = Config::load(project_root.join(CONFIG_FILE))?;
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Opens the project enclosing the current directory.
    ///
    /// # Errors
    /// Returns an error if no `tally.toml` is found or it cannot be loaded.
    pub fn find() -> Result<Self> {
        let (config, project_root) = find_project()?;
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Returns the absolute path of the entry source file.
    pub fn entry_path(&self) -> PathBuf {
        self.project_root.join(&self.config.analysis.entry)
    }

    /// Analyzes the entry file and returns its metrics.
    ///
    /// The metrics line is also written to the configured report file, if any.
    ///
    /// # Errors
    /// Returns an error if the entry file cannot be read, fails analysis, or
    /// the report cannot be written.
    pub fn check(&self) -> Result<(Metrics, Duration)> {
        let start = Instant::now();

        let entry = self.entry_path();
        let source = read_source(&entry)?;
        let name = self.config.analysis.entry.display().to_string();
        let metrics = pipeline::check_pipeline(&source, &name)?;

        if let Some(report) = &self.config.analysis.report {
            self.write_report(report, &metrics)?;
        }

        Ok((metrics, start.elapsed()))
    }

    /// Runs [`Project::check`] with status output around the metrics line.
    ///
    /// # Errors
    /// Returns an error if the check fails.
    pub fn check_verbose(&self) -> Result<Metrics> {
        print_project_status("Checking", &self.config, &self.project_root);

        let (metrics, duration) = self.check()?;
        println!("{metrics}");

        println!(
            "    {} project checked successfully in {:.2}s",
            "Finished".green().bold(),
            duration.as_secs_f64()
        );

        Ok(metrics)
    }

    fn write_report(&self, report: &Path, metrics: &Metrics) -> Result<()> {
        let path = self.project_root.join(report);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&path, format!("{metrics}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("wrote metrics report to {}", path.display());

        Ok(())
    }
}
