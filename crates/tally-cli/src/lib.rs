//! Tally CLI library for testing and reusability.

pub mod commands;
pub mod pipeline;
pub mod project;
pub mod utils;

pub use project::Project;
pub use tally_utils::Config;
