//! Expression parsing with operator precedence.
//!
//! Every level produces its node even with a single operand; the semantic
//! pass relies on the full chain `Expr > BoolExpr > CompExpr > AddExpr >
//! MulExpr > UnaExpr > NotExpr > GenValue`.

use super::parser::Parser;
use crate::ast::{Node, NodeKind};
use tally_core::{Result, Span};
use tally_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Node> {
        let inner = self.parse_bool_expr()?;
        let span = inner.span;
        Ok(Node::new(NodeKind::Expr, vec![inner], span))
    }

    /// Parses a `&&` / `||` chain.
    fn parse_bool_expr(&mut self) -> Result<Node> {
        let (operands, operators) = self.parse_chain(
            &[TokenKind::AmpersandAmpersand, TokenKind::PipePipe],
            Self::parse_comp_expr,
        )?;
        Ok(chain_node(NodeKind::BoolExpr { operators }, operands))
    }

    /// Parses an optional single comparison.
    fn parse_comp_expr(&mut self) -> Result<Node> {
        let left = self.parse_add_expr()?;

        let is_comparison = self.peek_kind().is_some_and(TokenKind::is_comparison);
        if !is_comparison {
            let span = left.span;
            return Ok(Node::new(
                NodeKind::CompExpr { operator: None },
                vec![left],
                span,
            ));
        }

        let operator = self.peek_text().to_string();
        self.advance();
        let right = self.parse_add_expr()?;

        let span = left.span.merge(right.span);
        Ok(Node::new(
            NodeKind::CompExpr {
                operator: Some(operator),
            },
            vec![left, right],
            span,
        ))
    }

    /// Parses a `+` / `-` chain.
    fn parse_add_expr(&mut self) -> Result<Node> {
        let (operands, operators) =
            self.parse_chain(&[TokenKind::Plus, TokenKind::Minus], Self::parse_mul_expr)?;
        Ok(chain_node(NodeKind::AddExpr { operators }, operands))
    }

    /// Parses a `*` / `/` / `%` chain.
    fn parse_mul_expr(&mut self) -> Result<Node> {
        let (operands, operators) = self.parse_chain(
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
            Self::parse_una_expr,
        )?;
        Ok(chain_node(NodeKind::MulExpr { operators }, operands))
    }

    /// Parses stacked prefix `+` / `-`.
    fn parse_una_expr(&mut self) -> Result<Node> {
        let start_span = self.current_span();
        let ops = self.parse_prefix(&[TokenKind::Plus, TokenKind::Minus]);
        let operand = self.parse_not_expr()?;

        let span = prefix_span(&ops, start_span, operand.span);
        Ok(Node::new(NodeKind::UnaExpr { ops }, vec![operand], span))
    }

    /// Parses stacked prefix `!`.
    fn parse_not_expr(&mut self) -> Result<Node> {
        let start_span = self.current_span();
        let ops = self.parse_prefix(&[TokenKind::Bang]);
        let operand = self.parse_gen_value()?;

        let span = prefix_span(&ops, start_span, operand.span);
        Ok(Node::new(NodeKind::NotExpr { ops }, vec![operand], span))
    }

    /// Parses `operand (op operand)*`, returning operands and operator texts.
    fn parse_chain(
        &mut self,
        operators: &[TokenKind],
        mut operand: impl FnMut(&mut Self) -> Result<Node>,
    ) -> Result<(Vec<Node>, Vec<String>)> {
        let mut operands = vec![operand(self)?];
        let mut texts = Vec::new();

        while let Some(text) = self.match_tokens(operators) {
            texts.push(text);
            operands.push(operand(self)?);
        }

        Ok((operands, texts))
    }

    fn parse_prefix(&mut self, operators: &[TokenKind]) -> Vec<String> {
        let mut ops = Vec::new();
        while let Some(text) = self.match_tokens(operators) {
            ops.push(text);
        }
        ops
    }
}

fn chain_node(kind: NodeKind, operands: Vec<Node>) -> Node {
    let span = match (operands.first(), operands.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => Span::default(),
    };
    Node::new(kind, operands, span)
}

fn prefix_span(ops: &[String], start: Span, operand: Span) -> Span {
    if ops.is_empty() {
        operand
    } else {
        start.merge(operand)
    }
}
