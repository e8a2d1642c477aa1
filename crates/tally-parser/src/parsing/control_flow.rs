//! Control flow parsing (if, while, for, foreach).

use super::parser::Parser;
use crate::ast::{Node, NodeKind};
use tally_core::Result;
use tally_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses `if (cond) stmt [else stmt]`.
    pub(crate) fn parse_if(&mut self) -> Result<Node> {
        let start_span = self.expect(&TokenKind::If)?;
        let condition = self.parse_condition()?;
        let then_branch = self.parse_statement()?;

        let mut children = vec![condition, then_branch];
        if self.match_token(&TokenKind::Else) {
            children.push(self.parse_statement()?);
        }

        let span = start_span.merge(self.previous_span());
        Ok(Node::new(NodeKind::IfStmt, children, span))
    }

    /// Parses `while (cond) stmt`.
    pub(crate) fn parse_while(&mut self) -> Result<Node> {
        let start_span = self.expect(&TokenKind::While)?;
        let condition = self.parse_condition()?;
        let body = self.parse_statement()?;

        let span = start_span.merge(body.span);
        Ok(Node::new(NodeKind::WhileStmt, vec![condition, body], span))
    }

    /// Parses `for (init; cond; update) stmt`.
    ///
    /// Children are `[init, condition, update, body]`.
    pub(crate) fn parse_for(&mut self) -> Result<Node> {
        let start_span = self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LeftParen)?;
        let init = self.parse_assignment()?;
        self.expect(&TokenKind::Semicolon)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;
        let update = self.parse_assignment()?;
        self.expect(&TokenKind::RightParen)?;
        let body = self.parse_statement()?;

        let span = start_span.merge(body.span);
        Ok(Node::new(
            NodeKind::ForStmt,
            vec![init, condition, update, body],
            span,
        ))
    }

    /// Parses `foreach (num x : array) stmt`.
    ///
    /// Children are `[declaration, array, body]`.
    pub(crate) fn parse_foreach(&mut self) -> Result<Node> {
        let start_span = self.expect(&TokenKind::Foreach)?;
        self.expect(&TokenKind::LeftParen)?;
        let declaration = self.parse_normal_declaration()?;
        self.expect(&TokenKind::Colon)?;
        let array = self.parse_identifier()?;
        self.expect(&TokenKind::RightParen)?;
        let body = self.parse_statement()?;

        let span = start_span.merge(body.span);
        Ok(Node::new(
            NodeKind::ForEachStmt,
            vec![declaration, array, body],
            span,
        ))
    }

    /// Parses a parenthesized condition.
    fn parse_condition(&mut self) -> Result<Node> {
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(condition)
    }
}
