//! Command-line interface for the Tally analyzer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_cli::commands;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Tally project
    #[command(visible_alias = "n")]
    New {
        /// Name of the project to create
        name: String,
    },

    /// Initialize a Tally project in an existing directory
    Init,

    /// Type check the current project and report its metrics
    #[command(visible_alias = "c")]
    Check,

    /// Type check a single source file and report its metrics
    #[command(visible_alias = "a")]
    Analyze {
        /// Source file to analyze
        file: PathBuf,
    },

    /// Print the syntax tree of a source file
    Tree {
        /// Source file to parse
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::New { name } => commands::new::execute(&name),
        Commands::Init => commands::init::execute(),
        Commands::Check => commands::check::execute(),
        Commands::Analyze { file } => commands::analyze::execute(&file),
        Commands::Tree { file } => commands::tree::execute(&file),
    }
}
