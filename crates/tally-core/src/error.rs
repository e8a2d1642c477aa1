//! Error types and result aliases for the Tally analyzer.

use crate::{Span, VarType};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Main error type for the Tally analyzer.
///
/// Semantic variants are fatal: the first one raised aborts the analysis and
/// no metrics are reported.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lexer error: {0}")]
    #[diagnostic(code(tally::lexer))]
    Lexer(String, #[label("here")] Span),

    #[error("Parser error: {0}")]
    #[diagnostic(code(tally::parser))]
    Parser(String, #[label("here")] Span),

    #[error("Malformed syntax tree: {0}")]
    #[diagnostic(code(tally::semantic::malformed_tree))]
    MalformedTree(String, #[label("here")] Span),

    #[error("Invalid declaration... variable {name} already exists")]
    #[diagnostic(code(tally::semantic::duplicate_declaration))]
    DuplicateDeclaration {
        name: String,
        #[label("declared again here")]
        span: Span,
        #[label("first declared here")]
        previous: Span,
    },

    #[error("Invalid use of undefined Identifier {name}")]
    #[diagnostic(code(tally::semantic::undefined_identifier))]
    UndefinedIdentifier {
        name: String,
        #[label("not declared")]
        span: Span,
    },

    #[error("Array type is required here...")]
    #[diagnostic(code(tally::semantic::invalid_array_type))]
    InvalidArrayType {
        found: VarType,
        #[label("not a list")]
        span: Span,
    },

    #[error("Array type {array} is incompatible with declared variable of type {element}...")]
    #[diagnostic(code(tally::semantic::incompatible_array_type))]
    IncompatibleArrayType {
        array: VarType,
        element: VarType,
        #[label("iterated here")]
        span: Span,
    },

    #[error("Invalid type in condition")]
    #[diagnostic(
        code(tally::semantic::invalid_condition_type),
        help("conditions must be of type `bool`")
    )]
    InvalidConditionType {
        found: VarType,
        #[label("not a `bool` expression")]
        span: Span,
    },

    #[error("Invalid type in assignation of Identifier {name}... was expecting {expected} but got {found}")]
    #[diagnostic(code(tally::semantic::assignment_type_mismatch))]
    AssignmentTypeMismatch {
        name: String,
        expected: VarType,
        found: VarType,
        #[label("expression of a different type")]
        span: Span,
    },

    #[error("Invalid type in expression")]
    #[diagnostic(
        code(tally::semantic::operand_type_mismatch),
        help("both operands of an operator must have the operator's type")
    )]
    OperandTypeMismatch {
        expected: VarType,
        found: VarType,
        #[label("operand of the wrong type")]
        span: Span,
    },

    #[error("Invalid type in expression")]
    #[diagnostic(
        code(tally::semantic::invalid_comparison_operand),
        help("`<`, `>`, `<=` and `>=` only compare `num` operands")
    )]
    InvalidComparisonOperand {
        operator: String,
        found: VarType,
        #[label("non-numeric comparison")]
        span: Span,
    },

    #[error("Invalid type in expression")]
    #[diagnostic(
        code(tally::semantic::invalid_unary_operand),
        help("`!` needs a `bool` operand, `+` and `-` need a `num` operand")
    )]
    InvalidUnaryOperand {
        operator: String,
        found: VarType,
        #[label("operand of the wrong type")]
        span: Span,
    },
}

impl Error {
    /// Returns true for the errors raised by semantic analysis.
    #[must_use]
    pub const fn is_semantic(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Lexer(..) | Self::Parser(..))
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from(span.start.offset..span.end.offset)
    }
}

/// Result type alias using the Tally Error type.
pub type Result<T> = std::result::Result<T, Error>;
