//! Core parser structure and helper methods.

use crate::ast::{Node, NodeKind};
use tally_core::{Error, Result, Span};
use tally_lexer::{Token, TokenKind};

/// Deepest allowed nesting of statements and parenthesized expressions.
pub const MAX_NESTING: usize = 100;

/// Parser for Tally source code.
pub struct Parser<'a> {
    tokens: &'a [(Token, Span)],
    current: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses a complete program: a block running to the end of input.
    pub fn parse_program(&mut self) -> Result<Node> {
        let block = self.parse_block()?;

        if !self.is_at_end() {
            return Err(Error::Parser(
                format!("Unexpected '{}'", self.peek_text()),
                self.current_span(),
            ));
        }

        let span = block.span;
        Ok(Node::new(NodeKind::Program, vec![block], span))
    }

    /// Parses statements until a closing brace or the end of input.
    ///
    /// The braces themselves belong to the enclosing statement.
    pub(crate) fn parse_block(&mut self) -> Result<Node> {
        let start_span = self.current_span();
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        let span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::new(start_span.start, start_span.start),
        };

        Ok(Node::new(NodeKind::Block, statements, span))
    }

    // ==================== Helper Methods ====================

    /// Runs `parse` one nesting level deeper, failing past [`MAX_NESTING`].
    pub(crate) fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(Error::Parser(
                format!("Nesting exceeds {MAX_NESTING} levels"),
                self.current_span(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub(crate) fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.current).map(|(token, _)| &token.kind)
    }

    pub(crate) fn peek_text(&self) -> &str {
        self.tokens
            .get(self.current)
            .map_or("end of input", |(token, _)| token.text.as_str())
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is one of `kinds`, returning its text.
    pub(crate) fn match_tokens(&mut self, kinds: &[TokenKind]) -> Option<String> {
        let kind = self.peek_kind()?;
        if kinds.contains(kind) {
            let text = self.peek_text().to_string();
            self.advance();
            Some(text)
        } else {
            None
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Span> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(Error::Parser(
                format!("Expected '{}', found '{}'", kind, self.peek_text()),
                self.current_span(),
            ))
        }
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<Node> {
        if self.check(&TokenKind::Identifier) {
            let name = self.peek_text().to_string();
            let span = self.current_span();
            self.advance();
            Ok(Node::leaf(NodeKind::Identifier { name }, span))
        } else {
            Err(Error::Parser(
                format!("Expected identifier, found '{}'", self.peek_text()),
                self.current_span(),
            ))
        }
    }

    /// Span of the current token, or an empty span just past the last one.
    pub(crate) fn current_span(&self) -> Span {
        match self.tokens.get(self.current) {
            Some((_, span)) => *span,
            None => self
                .tokens
                .last()
                .map_or_else(Span::default, |(_, span)| Span::new(span.end, span.end)),
        }
    }

    pub(crate) fn previous_span(&self) -> Span {
        if self.current > 0 {
            self.tokens[self.current - 1].1
        } else {
            self.current_span()
        }
    }
}
