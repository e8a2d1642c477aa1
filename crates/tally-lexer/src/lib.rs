//! Lexical analysis for the Tally language.
//!
//! This crate provides tokenization of Tally source code into a stream of tokens.

mod token;

pub use token::{Token, TokenKind};

use logos::Logos;
use tally_core::{Error, Result, Span};

/// Tokenizes Tally source code into a vector of tokens.
///
/// Spans carry byte offsets as well as 1-based line and column positions.
///
/// # Errors
/// Returns an error if the source contains invalid tokens
///
/// # Examples
/// ```
/// use tally_lexer::tokenize;
///
/// let source = "num x; x = 42;";
/// let tokens = tokenize(source).unwrap();
/// assert_eq!(tokens.len(), 7);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::resolve(source, range.start, range.end);

        let kind = result.map_err(|_| {
            Error::Lexer(
                format!("Invalid token '{}' at line {}", lexer.slice(), span.start.line),
                span,
            )
        })?;

        let text = lexer.slice().to_string();
        tokens.push((Token { kind, text }, span));
    }

    Ok(tokens)
}
