//! Expression type checking.

use crate::checker::core::{Synthesized, TypeChecker};
use crate::checker::helpers::require_type;
use tally_core::{Error, Result, VarType};
use tally_parser::{Node, NodeKind};

impl TypeChecker {
    /// Checks a comparison.
    ///
    /// With a single operand the node is transparent. With two, both must
    /// share a type; ordering operators further require `num`, while `==`
    /// and `!=` accept any matching pair. The result is `bool`.
    pub(crate) fn check_comparison(
        &mut self,
        node: &Node,
        operator: Option<&str>,
    ) -> Result<Synthesized> {
        let mut operand_types = Vec::with_capacity(node.children.len());
        for operand in &node.children {
            let synthesized = self.visit(operand, Some(&node.kind))?;
            operand_types.push(require_type(synthesized, operand)?);
        }

        match (operand_types.as_slice(), operator) {
            ([single], _) => Ok(Some(*single)),
            ([left, right], Some(operator)) => {
                if left != right {
                    return Err(Error::OperandTypeMismatch {
                        expected: *left,
                        found: *right,
                        span: node.children[1].span,
                    });
                }
                if !matches!(operator, "==" | "!=") && *left != VarType::Num {
                    return Err(Error::InvalidComparisonOperand {
                        operator: operator.to_string(),
                        found: *left,
                        span: node.span,
                    });
                }

                self.metrics.operators += 1;
                Ok(Some(VarType::Bool))
            }
            (operands, _) => Err(Error::MalformedTree(
                format!(
                    "comparison over {} operands{}",
                    operands.len(),
                    if operator.is_none() { " without an operator" } else { "" }
                ),
                node.span,
            )),
        }
    }

    /// Checks an `AddExpr`, `MulExpr` or `BoolExpr` chain.
    ///
    /// A single operand passes through unchecked. Otherwise every operand
    /// must be `operand_type`, and each joining operator counts once.
    pub(crate) fn check_operator_chain(
        &mut self,
        node: &Node,
        operand_type: VarType,
    ) -> Result<Synthesized> {
        match node.children.len() {
            0 => Err(Error::MalformedTree(
                format!("{} without operands", node.kind.name()),
                node.span,
            )),
            1 => self.visit_children(node),
            operands => {
                for operand in &node.children {
                    let synthesized = self.visit(operand, Some(&node.kind))?;
                    let found = require_type(synthesized, operand)?;
                    if found != operand_type {
                        return Err(Error::OperandTypeMismatch {
                            expected: operand_type,
                            found,
                            span: operand.span,
                        });
                    }
                }

                self.metrics.operators += operands - 1;
                Ok(Some(operand_type))
            }
        }
    }

    /// Checks stacked prefix operators (`!` or `+`/`-`).
    ///
    /// When at least one operator is present the operand must not be of the
    /// `rejected` type. Each stacked operator counts once.
    pub(crate) fn check_prefix(
        &mut self,
        node: &Node,
        ops: &[String],
        rejected: VarType,
    ) -> Result<Synthesized> {
        let synthesized = self.visit_children(node)?;

        if let Some(operator) = ops.first() {
            let found = require_type(synthesized, node)?;
            if found == rejected {
                return Err(Error::InvalidUnaryOperand {
                    operator: operator.clone(),
                    found,
                    span: node.span,
                });
            }
        }

        self.metrics.operators += ops.len();
        Ok(synthesized)
    }

    /// Checks an integer or boolean literal.
    pub(crate) fn check_literal(&mut self, node: &Node, literal: VarType) -> Result<Synthesized> {
        let synthesized = self.visit_children(node)?;
        Ok(synthesized.or(Some(literal)))
    }

    /// Checks an identifier occurrence.
    ///
    /// The occurrence introduced by a declaration is exempt from the
    /// existence check. Only identifiers used as values (under `GenValue`)
    /// synthesize their declared type.
    pub(crate) fn check_identifier(
        &mut self,
        node: &Node,
        name: &str,
        parent: Option<&NodeKind>,
    ) -> Result<Synthesized> {
        if parent.is_some_and(NodeKind::is_declaration) {
            return Ok(None);
        }

        let var_type = self.symbols.lookup_type(name, node.span)?;
        if matches!(parent, Some(NodeKind::GenValue)) {
            Ok(Some(var_type))
        } else {
            Ok(None)
        }
    }
}
