//! Core type checker structure and node dispatch.

use crate::metrics::Metrics;
use crate::symbol_table::SymbolTable;
use log::trace;
use tally_core::{Error, Result, VarType};
use tally_parser::{Node, NodeKind};

/// Deepest tree the checker walks before giving up.
pub const MAX_DEPTH: usize = 1024;

/// Type synthesized by a visited node, `None` for nodes that produce no value.
pub(crate) type Synthesized = Option<VarType>;

/// Type checker for Tally programs.
///
/// Walks the syntax tree depth-first, validating types against the symbol
/// table and counting metrics. Each visit returns the type the node
/// synthesizes for its parent.
pub struct TypeChecker {
    /// Every variable declared so far
    pub(crate) symbols: SymbolTable,
    /// Counters updated during the walk
    pub(crate) metrics: Metrics,
    depth: usize,
}

impl TypeChecker {
    /// Creates a new type checker with an empty symbol table.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            metrics: Metrics::new(),
            depth: 0,
        }
    }

    /// The symbol table built so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The metrics counted so far.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Visits `node`, whose parent has kind `parent`.
    pub(crate) fn visit(&mut self, node: &Node, parent: Option<&NodeKind>) -> Result<Synthesized> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::MalformedTree(
                format!("tree nesting exceeds {MAX_DEPTH} levels"),
                node.span,
            ));
        }

        self.depth += 1;
        let synthesized = self.dispatch(node, parent);
        self.depth -= 1;
        synthesized
    }

    fn dispatch(&mut self, node: &Node, parent: Option<&NodeKind>) -> Result<Synthesized> {
        trace!("visiting {}", node.kind);

        match &node.kind {
            NodeKind::Program
            | NodeKind::Declaration
            | NodeKind::Block
            | NodeKind::Stmt
            | NodeKind::Expr
            | NodeKind::GenValue => self.visit_children(node),

            NodeKind::NormalDeclaration { keyword } => self.check_normal_declaration(node, keyword),
            NodeKind::ListDeclaration { keyword } => self.check_list_declaration(node, keyword),
            NodeKind::AssignStmt => self.check_assignment(node),

            NodeKind::ForEachStmt => self.check_foreach(node),
            NodeKind::ForStmt => {
                self.metrics.for_loops += 1;
                self.check_conditional(node, 1)
            }
            NodeKind::IfStmt => {
                self.metrics.if_statements += 1;
                self.check_conditional(node, 0)
            }
            NodeKind::WhileStmt => {
                self.metrics.while_loops += 1;
                self.check_conditional(node, 0)
            }

            NodeKind::CompExpr { operator } => self.check_comparison(node, operator.as_deref()),
            NodeKind::AddExpr { .. } | NodeKind::MulExpr { .. } => {
                self.check_operator_chain(node, VarType::Num)
            }
            NodeKind::BoolExpr { .. } => self.check_operator_chain(node, VarType::Bool),
            NodeKind::NotExpr { ops } => self.check_prefix(node, ops, VarType::Num),
            NodeKind::UnaExpr { ops } => self.check_prefix(node, ops, VarType::Bool),

            NodeKind::BoolValue { .. } => self.check_literal(node, VarType::Bool),
            NodeKind::IntValue { .. } => self.check_literal(node, VarType::Num),
            NodeKind::Identifier { name } => self.check_identifier(node, name, parent),
        }
    }

    /// Visits every child in order.
    ///
    /// The result is the type synthesized by the last child that produced one.
    pub(crate) fn visit_children(&mut self, node: &Node) -> Result<Synthesized> {
        let mut synthesized = None;
        for child in &node.children {
            synthesized = self.visit(child, Some(&node.kind))?.or(synthesized);
        }
        Ok(synthesized)
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}
