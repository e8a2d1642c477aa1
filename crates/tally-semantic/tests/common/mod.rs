//! Common test utilities for semantic analysis tests.

#![allow(dead_code)]

use tally_core::{Error, Result};
use tally_lexer::tokenize;
use tally_parser::{Node, parse};
use tally_semantic::{Metrics, analyze};

/// Lexes, parses and analyzes Tally source code.
pub fn compile_and_analyze(source: &str) -> Result<Metrics> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    analyze(&program)
}

/// Lexes and parses Tally source code.
pub fn compile(source: &str) -> Node {
    let tokens = tokenize(source).expect("source should lex");
    parse(&tokens).expect("source should parse")
}

/// Analyzes source that is expected to pass and returns its metrics.
pub fn metrics_of(source: &str) -> Metrics {
    match compile_and_analyze(source) {
        Ok(metrics) => metrics,
        Err(error) => panic!("expected analysis to pass, got: {error}"),
    }
}

/// Analyzes source that is expected to fail semantic analysis.
pub fn error_of(source: &str) -> Error {
    match compile_and_analyze(source) {
        Ok(metrics) => panic!("expected analysis to fail, got {metrics}"),
        Err(error) => {
            assert!(error.is_semantic(), "expected a semantic error, got: {error}");
            error
        }
    }
}
