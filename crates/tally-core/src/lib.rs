//! Core types and utilities for the Tally analyzer.
//!
//! This crate provides the source spans, the error taxonomy and the value
//! type lattice shared by every stage.

pub mod error;
pub mod span;
pub mod types;

pub use error::{Error, Result};
pub use span::{Location, Span};
pub use types::VarType;
