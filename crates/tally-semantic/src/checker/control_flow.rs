//! Control flow type checking (if, while, for, foreach).

use crate::checker::core::{Synthesized, TypeChecker};
use crate::checker::helpers::{child, identifier_name, require_type};
use tally_core::{Error, Result, VarType};
use tally_parser::Node;

impl TypeChecker {
    /// Checks a statement whose child at `condition_index` is its condition.
    ///
    /// The other children are visited first, in order, and the condition
    /// last; the condition must then be `bool`.
    pub(crate) fn check_conditional(
        &mut self,
        node: &Node,
        condition_index: usize,
    ) -> Result<Synthesized> {
        let condition = child(node, condition_index)?;

        for (index, branch) in node.children.iter().enumerate() {
            if index != condition_index {
                self.visit(branch, Some(&node.kind))?;
            }
        }

        let synthesized = self.visit(condition, Some(&node.kind))?;
        let found = require_type(synthesized, condition)?;
        if found != VarType::Bool {
            return Err(Error::InvalidConditionType {
                found,
                span: condition.span,
            });
        }

        Ok(None)
    }

    /// Checks `foreach (decl : array) body`.
    pub(crate) fn check_foreach(&mut self, node: &Node) -> Result<Synthesized> {
        self.metrics.for_loops += 1;

        let declaration = child(node, 0)?;
        let array = child(node, 1)?;
        let body = child(node, 2)?;

        let synthesized = self.visit(declaration, Some(&node.kind))?;
        let element = require_type(synthesized, declaration)?;

        self.visit(array, Some(&node.kind))?;
        let array_type = self
            .symbols
            .lookup_type(identifier_name(array)?, array.span)?;

        if !array_type.is_list() {
            return Err(Error::InvalidArrayType {
                found: array_type,
                span: array.span,
            });
        }
        if element.list_of() != Some(array_type) {
            return Err(Error::IncompatibleArrayType {
                array: array_type,
                element,
                span: array.span,
            });
        }

        self.visit(body, Some(&node.kind))?;
        Ok(None)
    }
}
