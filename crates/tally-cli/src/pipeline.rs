//! Analysis pipeline stages.
//!
//! Every stage renders its diagnostic with the named source attached before
//! handing a plain failure back to the command.

use anyhow::Result;
use log::debug;
use miette::NamedSource;
use std::io::Write;
use tally_core::Span;
use tally_lexer::{Token, tokenize};
use tally_parser::{Node, parse};
use tally_semantic::Metrics;

fn report(error: tally_core::Error, name: &str, source: &str) {
    let report =
        miette::Report::new(error).with_source_code(NamedSource::new(name, source.to_string()));
    eprintln!("{report:?}");
}

/// Runs lexical analysis on source code.
///
/// # Errors
/// Returns an error if lexical analysis fails.
pub fn lex(source: &str, name: &str) -> Result<Vec<(Token, Span)>> {
    let tokens = tokenize(source).map_err(|e| {
        report(e, name, source);
        anyhow::anyhow!("Lexical analysis failed")
    })?;
    debug!("lexed {} tokens from {name}", tokens.len());
    Ok(tokens)
}

/// Runs parsing on tokens to produce a syntax tree.
///
/// # Errors
/// Returns an error if parsing fails.
pub fn parse_tokens(tokens: &[(Token, Span)], source: &str, name: &str) -> Result<Node> {
    let program = parse(tokens).map_err(|e| {
        report(e, name, source);
        anyhow::anyhow!("Parsing failed")
    })?;
    debug!("parsed {name}");
    Ok(program)
}

/// Runs semantic analysis on the syntax tree.
///
/// # Errors
/// Returns an error if semantic analysis fails.
pub fn analyze(program: &Node, source: &str, name: &str) -> Result<Metrics> {
    tally_semantic::analyze(program).map_err(|e| {
        report(e, name, source);
        anyhow::anyhow!("Semantic analysis failed")
    })
}

/// Runs every stage and returns the metrics of an accepted program.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn check_pipeline(source: &str, name: &str) -> Result<Metrics> {
    let tokens = lex(source, name)?;
    let program = parse_tokens(&tokens, source, name)?;
    analyze(&program, source, name)
}

/// Runs every stage and writes the metrics line to `sink`.
///
/// Nothing is written when a stage fails.
///
/// # Errors
/// Returns an error if any stage fails or the sink cannot be written.
pub fn report_pipeline<W: Write>(source: &str, name: &str, sink: &mut W) -> Result<Metrics> {
    let metrics = check_pipeline(source, name)?;
    writeln!(sink, "{metrics}")?;
    Ok(metrics)
}

/// Lexes and parses source code, returning the indented tree dump.
///
/// # Errors
/// Returns an error if lexing or parsing fails.
pub fn tree_pipeline(source: &str, name: &str) -> Result<String> {
    let tokens = lex(source, name)?;
    let program = parse_tokens(&tokens, source, name)?;
    Ok(program.dump())
}
