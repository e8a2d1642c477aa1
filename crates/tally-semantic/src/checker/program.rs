//! Program type checking.

use crate::checker::core::TypeChecker;
use crate::metrics::Metrics;
use log::debug;
use tally_core::{Error, Result};
use tally_parser::{Node, NodeKind};

impl TypeChecker {
    /// Checks a complete program and returns the final metrics.
    ///
    /// # Errors
    /// Returns the first semantic error found in the tree.
    pub fn check_program(&mut self, program: &Node) -> Result<Metrics> {
        if program.kind != NodeKind::Program {
            return Err(Error::MalformedTree(
                format!("expected Program at the root, found {}", program.kind.name()),
                program.span,
            ));
        }

        self.visit_children(program)?;

        debug!("analysis finished: {}", self.metrics);
        Ok(self.metrics)
    }
}
