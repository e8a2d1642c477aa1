//! Semantic analysis for Tally programs.
//!
//! This crate type checks the syntax tree produced by the parser and counts
//! structural metrics (declarations, loops, conditionals and operator
//! applications) along the way. The first semantic violation aborts the
//! analysis; no metrics are reported for a rejected program.

mod checker;
mod metrics;
mod symbol_table;

pub use checker::{MAX_DEPTH, TypeChecker};
pub use metrics::Metrics;
pub use symbol_table::{Symbol, SymbolTable};

use std::io::Write;
use tally_core::Result;
use tally_parser::Node;

/// Performs semantic analysis on a Tally program.
///
/// Every call starts from an empty symbol table and zeroed counters.
///
/// # Errors
/// Returns the first semantic error found, for example:
/// - Duplicate declarations or undefined identifiers
/// - Non-boolean conditions
/// - Operand, assignment and `foreach` type mismatches
///
/// # Examples
/// ```
/// use tally_lexer::tokenize;
/// use tally_parser::parse;
/// use tally_semantic::analyze;
///
/// let source = "num a; num b; bool c; c = a < b; if (c) { a = a + 1; }";
/// let tokens = tokenize(source).unwrap();
/// let program = parse(&tokens).unwrap();
/// let metrics = analyze(&program).unwrap();
/// assert_eq!(metrics.to_string(), "{VAR:3, WHILE:0, IF:1, FOR:0, OP:2}");
/// ```
pub fn analyze(program: &Node) -> Result<Metrics> {
    let mut checker = TypeChecker::new();
    checker.check_program(program)
}

/// Performs semantic analysis and writes the metrics report to `sink`.
///
/// Exactly one line is written on success and nothing on failure.
///
/// # Errors
/// Returns the first semantic error found, or an IO error if the report
/// cannot be written.
pub fn analyze_into<W: Write>(program: &Node, sink: &mut W) -> Result<Metrics> {
    let metrics = analyze(program)?;
    writeln!(sink, "{metrics}")?;
    Ok(metrics)
}
