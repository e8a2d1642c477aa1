//! Syntax tree definitions for Tally.
//!
//! The tree is a uniform node tree: every grammar production produces a
//! [`Node`] whose [`NodeKind`] names the production and carries its literal
//! payload, and whose children appear in grammar order. Single-child
//! productions are kept in the tree, so child indices are fixed by the
//! grammar alone.

use std::fmt;
use tally_core::Span;

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub span: Span,
}

/// The production a [`Node`] was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The root: a single `Block`.
    Program,
    /// Wrapper around a normal or list declaration.
    Declaration,
    /// `num x` / `bool x`
    NormalDeclaration { keyword: String },
    /// `listnum x` / `listbool x`
    ListDeclaration { keyword: String },
    Block,
    Stmt,
    /// `foreach (decl : array) body`
    ForEachStmt,
    /// `for (init; condition; update) body`
    ForStmt,
    /// `if (condition) then [else otherwise]`
    IfStmt,
    /// `while (condition) body`
    WhileStmt,
    /// `target = value`
    AssignStmt,
    Expr,
    /// Comparison; `operator` is present only with two operands.
    CompExpr { operator: Option<String> },
    /// `+` / `-` chain.
    AddExpr { operators: Vec<String> },
    /// `*` / `/` / `%` chain.
    MulExpr { operators: Vec<String> },
    /// `&&` / `||` chain.
    BoolExpr { operators: Vec<String> },
    /// Stacked prefix `!`.
    NotExpr { ops: Vec<String> },
    /// Stacked prefix `+` / `-`.
    UnaExpr { ops: Vec<String> },
    /// A value: identifier, literal or parenthesized expression.
    GenValue,
    BoolValue { value: bool },
    /// Decimal literal, kept as written.
    IntValue { value: String },
    Identifier { name: String },
}

impl NodeKind {
    /// The production name, as printed in tree dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Declaration => "Declaration",
            Self::NormalDeclaration { .. } => "NormalDeclaration",
            Self::ListDeclaration { .. } => "ListDeclaration",
            Self::Block => "Block",
            Self::Stmt => "Stmt",
            Self::ForEachStmt => "ForEachStmt",
            Self::ForStmt => "ForStmt",
            Self::IfStmt => "IfStmt",
            Self::WhileStmt => "WhileStmt",
            Self::AssignStmt => "AssignStmt",
            Self::Expr => "Expr",
            Self::CompExpr { .. } => "CompExpr",
            Self::AddExpr { .. } => "AddExpr",
            Self::MulExpr { .. } => "MulExpr",
            Self::BoolExpr { .. } => "BoolExpr",
            Self::NotExpr { .. } => "NotExpr",
            Self::UnaExpr { .. } => "UnaExpr",
            Self::GenValue => "GenValue",
            Self::BoolValue { .. } => "BoolValue",
            Self::IntValue { .. } => "IntValue",
            Self::Identifier { .. } => "Identifier",
        }
    }

    /// Returns true for the two declaration productions that introduce a name.
    pub const fn is_declaration(&self) -> bool {
        matches!(
            self,
            Self::NormalDeclaration { .. } | Self::ListDeclaration { .. }
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::NormalDeclaration { keyword } | Self::ListDeclaration { keyword } => {
                write!(f, "({keyword})")
            }
            Self::CompExpr {
                operator: Some(operator),
            } => write!(f, "({operator})"),
            Self::AddExpr { operators }
            | Self::MulExpr { operators }
            | Self::BoolExpr { operators } if !operators.is_empty() => {
                write!(f, "({})", operators.join(" "))
            }
            Self::NotExpr { ops } | Self::UnaExpr { ops } if !ops.is_empty() => {
                write!(f, "({})", ops.concat())
            }
            Self::BoolValue { value } => write!(f, "({value})"),
            Self::IntValue { value } => write!(f, "({value})"),
            Self::Identifier { name } => write!(f, "({name})"),
            _ => Ok(()),
        }
    }
}

impl Node {
    /// Creates a node.
    pub fn new(kind: NodeKind, children: Vec<Node>, span: Span) -> Self {
        Self {
            kind,
            children,
            span,
        }
    }

    /// Creates a node without children.
    pub fn leaf(kind: NodeKind, span: Span) -> Self {
        Self::new(kind, Vec::new(), span)
    }

    /// Returns the child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// The identifier name if this is an `Identifier` node.
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier { name } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Renders the tree, one node per line, indented by depth.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.kind, indent = depth * 2)?;
        for child in &self.children {
            child.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
