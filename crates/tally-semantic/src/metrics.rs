//! Structural metrics collected during type checking.

use std::fmt;

/// Counters incremented by the tree walk.
///
/// Rendered as `{VAR:n, WHILE:n, IF:n, FOR:n, OP:n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Variable declarations, scalar and list (`VAR`).
    pub declarations: usize,
    /// `while` loops (`WHILE`).
    pub while_loops: usize,
    /// `if` statements (`IF`).
    pub if_statements: usize,
    /// `for` and `foreach` loops (`FOR`).
    pub for_loops: usize,
    /// Operator applications, binary and unary (`OP`).
    pub operators: usize,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{VAR:{}, WHILE:{}, IF:{}, FOR:{}, OP:{}}}",
            self.declarations, self.while_loops, self.if_statements, self.for_loops, self.operators
        )
    }
}
