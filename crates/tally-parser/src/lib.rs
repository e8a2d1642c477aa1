//! Parser for the Tally language.
//!
//! This crate turns token streams into the syntax tree consumed by semantic
//! analysis.

pub mod ast;
mod parsing;

pub use ast::{Node, NodeKind};
pub use parsing::{MAX_NESTING, Parser};

use tally_core::{Result, Span};
use tally_lexer::Token;

/// Parses a slice of tokens into a program tree.
///
/// # Errors
/// Returns an error if the token stream contains syntax errors
///
/// # Examples
/// ```
/// use tally_lexer::tokenize;
/// use tally_parser::{NodeKind, parse};
///
/// let tokens = tokenize("num a; a = 1 + 2;").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.kind, NodeKind::Program);
/// ```
pub fn parse(tokens: &[(Token, Span)]) -> Result<Node> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
