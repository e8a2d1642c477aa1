//! Tree shape accessors shared by the checks.
//!
//! These guard against trees that do not follow the grammar; the bundled
//! parser never produces one.

use crate::checker::core::Synthesized;
use tally_core::{Error, Result, VarType};
use tally_parser::Node;

/// Returns the child of `node` at `index`.
pub(crate) fn child(node: &Node, index: usize) -> Result<&Node> {
    node.child(index).ok_or_else(|| {
        Error::MalformedTree(
            format!("{} is missing child {index}", node.kind.name()),
            node.span,
        )
    })
}

/// Returns the name carried by an `Identifier` node.
pub(crate) fn identifier_name(node: &Node) -> Result<&str> {
    node.identifier().ok_or_else(|| {
        Error::MalformedTree(
            format!("expected Identifier, found {}", node.kind.name()),
            node.span,
        )
    })
}

/// Unwraps the type synthesized by `node`.
pub(crate) fn require_type(synthesized: Synthesized, node: &Node) -> Result<VarType> {
    synthesized.ok_or_else(|| {
        Error::MalformedTree(
            format!("{} does not produce a value", node.kind.name()),
            node.span,
        )
    })
}
