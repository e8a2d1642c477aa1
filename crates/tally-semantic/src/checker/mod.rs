//! Type checking implementation modules.

mod control_flow;
mod core;
mod expressions;
mod helpers;
mod program;
mod statements;

pub use core::{MAX_DEPTH, TypeChecker};
