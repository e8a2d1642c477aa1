//! Shared utilities for Tally tooling.

pub mod config;

pub use config::{Analysis, Config, Package};
