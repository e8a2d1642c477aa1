//! Parsing implementation modules.

mod control_flow;
mod expressions;
mod parser;
mod primary;
mod statements;

pub use parser::{MAX_NESTING, Parser};
