//! Value parsing (identifiers, literals, parenthesized expressions).

use super::parser::Parser;
use crate::ast::{Node, NodeKind};
use tally_core::{Error, Result};
use tally_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a value, wrapped in a `GenValue` node.
    pub(crate) fn parse_gen_value(&mut self) -> Result<Node> {
        let span = self.current_span();

        let inner = match self.peek_kind().cloned() {
            Some(TokenKind::Identifier) => self.parse_identifier()?,
            Some(TokenKind::Integer) => self.parse_int_value()?,
            Some(TokenKind::True) => {
                self.advance();
                Node::leaf(NodeKind::BoolValue { value: true }, span)
            }
            Some(TokenKind::False) => {
                self.advance();
                Node::leaf(NodeKind::BoolValue { value: false }, span)
            }
            Some(TokenKind::LeftParen) => {
                self.advance();
                let expression = self.nested(Self::parse_expression)?;
                self.expect(&TokenKind::RightParen)?;
                expression
            }
            _ => {
                return Err(Error::Parser(
                    format!("Expected value, found '{}'", self.peek_text()),
                    span,
                ));
            }
        };

        let span = span.merge(self.previous_span());
        Ok(Node::new(NodeKind::GenValue, vec![inner], span))
    }

    /// Parses an integer literal of any length.
    fn parse_int_value(&mut self) -> Result<Node> {
        let span = self.current_span();
        let value = self.peek_text().to_string();
        self.advance();
        Ok(Node::leaf(NodeKind::IntValue { value }, span))
    }
}
