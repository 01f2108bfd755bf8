//! Parsing (tokens to AST)
//!
//! The parser converts a stream of tokens into an Abstract Syntax Tree (AST).
//! Uses Pratt parsing for expressions and recursive descent for statements.

mod expr;
mod stmt;

use crate::ast::*;
use crate::diagnostic::{error_codes, Diagnostic};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser state for building AST from tokens
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
    pub(super) diagnostics: Vec<Diagnostic>,
    /// Source text used to locate diagnostics, when known
    source: Option<String>,
}

/// Operator precedence levels for Pratt parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    Lowest,
    Or,         // or xor
    And,        // and
    Equality,   // == !=
    Comparison, // < <= > >=
    Term,       // + -
    Factor,     // * / %
    Unary,      // not -
}

impl Parser {
    /// Create a new parser for the given tokens
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, "", Span::new(end, end)));
        }
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
            source: None,
        }
    }

    /// Attach the source text so diagnostics carry line, column and snippet
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Parse tokens into an AST
    ///
    /// Top-level statements are folded into one left-nested sequence.
    pub fn parse(&mut self) -> (Program, Vec<Diagnostic>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(_) => self.synchronize(),
            }
        }

        tracing::debug!(
            statements = statements.len(),
            errors = self.diagnostics.len(),
            "parsed program"
        );
        (
            Program::from_statements(statements),
            std::mem::take(&mut self.diagnostics),
        )
    }

    // === Helper methods ===

    /// Advance to next token and return reference to previous
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[self.current - 1]
    }

    /// Peek at current token
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Peek one token past the current one
    pub(super) fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.current + 1)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// Check if current token matches kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Match and consume token if it matches
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume token of given kind or error
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ()> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            self.error(message);
            Err(())
        }
    }

    /// Check if at end of token stream
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len() || self.tokens[self.current].kind == TokenKind::Eof
    }

    /// Record an error at the current token
    pub(super) fn error(&mut self, message: &str) {
        let token = self.peek();
        let span = token.span;
        let found = token.kind;
        let mut diagnostic = Diagnostic::error_with_code(error_codes::SYNTAX_ERROR, message, span)
            .with_label(format!("found {}", found))
            .with_help("check your syntax for typos or missing tokens");
        if let Some(source) = &self.source {
            diagnostic = diagnostic.with_source(source, span);
        }
        self.diagnostics.push(diagnostic);
    }

    /// Consume an identifier token with a dedicated message for keywords
    pub(super) fn consume_identifier(&mut self, context: &str) -> Result<Identifier, ()> {
        let current = self.peek();

        if current.kind.is_reserved() {
            let message = format!("Cannot use reserved keyword '{}' as {}", current.lexeme, context);
            self.error(&message);
            Err(())
        } else if current.kind == TokenKind::Identifier {
            let token = self.advance();
            Ok(Identifier::new(token.lexeme.clone(), token.span))
        } else {
            let message = format!("Expected {} but found {}", context, current.kind);
            self.error(&message);
            Err(())
        }
    }

    /// Comma-separated identifiers between parentheses, e.g. `(a, b)`
    pub(super) fn parse_name_list(&mut self, context: &str) -> Result<(Vec<Identifier>, Span), ()> {
        self.consume(TokenKind::LeftParen, "Expected '('")?;
        let mut names = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                names.push(self.consume_identifier(context)?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        let end = self.consume(TokenKind::RightParen, "Expected ')'")?.span;
        Ok((names, end))
    }

    /// Skip tokens until a likely statement boundary
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.tokens[self.current - 1].kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Fn
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::Print
                | TokenKind::RightBrace => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
