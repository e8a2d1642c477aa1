//! Declaration and assignment type checking.

use crate::checker::core::{Synthesized, TypeChecker};
use crate::checker::helpers::{child, identifier_name, require_type};
use log::debug;
use tally_core::{Error, Result, VarType};
use tally_parser::Node;

impl TypeChecker {
    /// Checks `num x` / `bool x`.
    ///
    /// Synthesizes the declared type, which `foreach` reads for its loop
    /// variable.
    pub(crate) fn check_normal_declaration(
        &mut self,
        node: &Node,
        keyword: &str,
    ) -> Result<Synthesized> {
        let var_type = VarType::from_scalar_keyword(keyword);
        self.declare(node, var_type)?;
        Ok(Some(var_type))
    }

    /// Checks `listnum x` / `listbool x`.
    pub(crate) fn check_list_declaration(
        &mut self,
        node: &Node,
        keyword: &str,
    ) -> Result<Synthesized> {
        let var_type = VarType::from_list_keyword(keyword);
        self.declare(node, var_type)?;
        Ok(None)
    }

    /// Registers the identifier of a declaration node.
    fn declare(&mut self, node: &Node, var_type: VarType) -> Result<()> {
        let target = child(node, 0)?;
        self.visit(target, Some(&node.kind))?;

        let name = identifier_name(target)?;
        self.symbols.declare(name, var_type, target.span)?;
        self.metrics.declarations += 1;

        debug!("declared '{name}' as {var_type}");
        Ok(())
    }

    /// Checks `target = value`.
    pub(crate) fn check_assignment(&mut self, node: &Node) -> Result<Synthesized> {
        let target = child(node, 0)?;
        let value = child(node, 1)?;

        let synthesized = self.visit_children(node)?;

        let name = identifier_name(target)?;
        let expected = self.symbols.lookup_type(name, target.span)?;
        let found = require_type(synthesized, value)?;

        if found != expected {
            return Err(Error::AssignmentTypeMismatch {
                name: name.to_string(),
                expected,
                found,
                span: value.span,
            });
        }

        Ok(None)
    }
}
