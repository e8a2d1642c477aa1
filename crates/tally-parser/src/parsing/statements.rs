//! Statement and declaration parsing.

use super::parser::Parser;
use crate::ast::{Node, NodeKind};
use tally_core::{Error, Result};
use tally_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a statement, wrapped in a `Stmt` node.
    pub(crate) fn parse_statement(&mut self) -> Result<Node> {
        let start_span = self.current_span();
        let inner = self.nested(Self::parse_statement_body)?;
        let span = start_span.merge(self.previous_span());
        Ok(Node::new(NodeKind::Stmt, vec![inner], span))
    }

    fn parse_statement_body(&mut self) -> Result<Node> {
        let start_span = self.current_span();

        let statement = match self.peek_kind().cloned() {
            Some(TokenKind::If) => self.parse_if()?,
            Some(TokenKind::While) => self.parse_while()?,
            Some(TokenKind::For) => self.parse_for()?,
            Some(TokenKind::Foreach) => self.parse_foreach()?,
            Some(TokenKind::LeftBrace) => {
                self.advance();
                let block = self.parse_block()?;
                self.expect(&TokenKind::RightBrace)?;
                block
            }
            Some(kind) if kind.is_type_keyword() => {
                let declaration = self.parse_declaration()?;
                self.expect(&TokenKind::Semicolon)?;
                declaration
            }
            Some(TokenKind::Identifier) => {
                let assignment = self.parse_assignment()?;
                self.expect(&TokenKind::Semicolon)?;
                assignment
            }
            _ => {
                return Err(Error::Parser(
                    format!("Expected statement, found '{}'", self.peek_text()),
                    start_span,
                ));
            }
        };

        Ok(statement)
    }

    /// Parses a declaration, wrapped in a `Declaration` node.
    fn parse_declaration(&mut self) -> Result<Node> {
        let inner = if matches!(
            self.peek_kind(),
            Some(TokenKind::ListNum | TokenKind::ListBool)
        ) {
            self.parse_list_declaration()?
        } else {
            self.parse_normal_declaration()?
        };

        let span = inner.span;
        Ok(Node::new(NodeKind::Declaration, vec![inner], span))
    }

    /// Parses `num x` or `bool x`.
    pub(crate) fn parse_normal_declaration(&mut self) -> Result<Node> {
        let start_span = self.current_span();
        let keyword = self
            .match_tokens(&[TokenKind::Num, TokenKind::Bool])
            .ok_or_else(|| {
                Error::Parser(
                    format!("Expected 'num' or 'bool', found '{}'", self.peek_text()),
                    start_span,
                )
            })?;
        let identifier = self.parse_identifier()?;

        let span = start_span.merge(identifier.span);
        Ok(Node::new(
            NodeKind::NormalDeclaration { keyword },
            vec![identifier],
            span,
        ))
    }

    /// Parses `listnum x` or `listbool x`.
    fn parse_list_declaration(&mut self) -> Result<Node> {
        let start_span = self.current_span();
        let keyword = self
            .match_tokens(&[TokenKind::ListNum, TokenKind::ListBool])
            .ok_or_else(|| {
                Error::Parser(
                    format!(
                        "Expected 'listnum' or 'listbool', found '{}'",
                        self.peek_text()
                    ),
                    start_span,
                )
            })?;
        let identifier = self.parse_identifier()?;

        let span = start_span.merge(identifier.span);
        Ok(Node::new(
            NodeKind::ListDeclaration { keyword },
            vec![identifier],
            span,
        ))
    }

    /// Parses `target = expr` (without the terminating semicolon).
    pub(crate) fn parse_assignment(&mut self) -> Result<Node> {
        let target = self.parse_identifier()?;
        self.expect(&TokenKind::Equal)?;
        let value = self.parse_expression()?;

        let span = target.span.merge(value.span);
        Ok(Node::new(NodeKind::AssignStmt, vec![target, value], span))
    }
}
