//! Command implementations for the Tally CLI.

pub mod analyze;
pub mod check;
pub mod init;
pub mod new;
pub mod tree;
