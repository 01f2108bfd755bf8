//! Lexical analysis (tokenization)
//!
//! The lexer converts Cesserract source code into a stream of tokens with
//! span information. Every produced token is reported as a TRACE event.

use crate::diagnostic::{error_codes, Diagnostic};
use crate::span::Span;
use crate::token::{Token, TokenKind};

mod literals;

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Original source code
    pub(super) source: String,
    /// Characters of source code
    pub(super) chars: Vec<char>,
    /// Current position in chars
    pub(super) current: usize,
    /// Current line number (1-indexed)
    pub(super) line: u32,
    /// Start position of current token
    pub(super) start_pos: usize,
    /// Start line of current token
    pub(super) start_line: u32,
    /// Nesting depth of block comments
    comment_level: u32,
    /// Collected diagnostics
    pub(super) diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let chars: Vec<char> = source.chars().collect();
        Self {
            source,
            chars,
            current: 0,
            line: 1,
            start_pos: 0,
            start_line: 1,
            comment_level: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the source code, returning tokens and any diagnostics
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            tracing::trace!(line = self.start_line, "{}", token.describe());
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, std::mem::take(&mut self.diagnostics))
    }

    /// Scan the next token
    fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.start_pos = self.current;
        self.start_line = self.line;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof, "");
        }

        let c = self.advance();

        match c {
            '(' => self.make_token(TokenKind::LeftParen, "("),
            ')' => self.make_token(TokenKind::RightParen, ")"),
            '{' => self.make_token(TokenKind::LeftBrace, "{"),
            '}' => self.make_token(TokenKind::RightBrace, "}"),
            ';' => self.make_token(TokenKind::Semicolon, ";"),
            ',' => self.make_token(TokenKind::Comma, ","),
            '+' => self.make_token(TokenKind::Plus, "+"),
            '-' => self.make_token(TokenKind::Minus, "-"),
            '*' => self.make_token(TokenKind::Star, "*"),
            '/' => self.make_token(TokenKind::Slash, "/"),
            '%' => self.make_token(TokenKind::Percent, "%"),

            '=' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::EqualEqual, "==")
                } else {
                    self.make_token(TokenKind::Equal, "=")
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::BangEqual, "!=")
                } else {
                    self.error_token("Unexpected character '!' (use 'not' for negation)")
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::LessEqual, "<=")
                } else {
                    self.make_token(TokenKind::Less, "<")
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.make_token(TokenKind::GreaterEqual, ">=")
                } else {
                    self.make_token(TokenKind::Greater, ">")
                }
            }

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),

            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => self.error_token(&format!("Unexpected character '{}'", c)),
        }
    }

    /// Skip whitespace and comments
    ///
    /// Block comments nest: every `/*` opens a level and every `*/` closes
    /// one. A `*/` outside any comment is dropped with a warning.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.is_at_end() {
                return;
            }

            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                '/' if self.peek_next() == Some('/') => {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                '/' if self.peek_next() == Some('*') => self.block_comment(),
                '*' if self.peek_next() == Some('/') => self.stray_comment_terminator(),
                _ => return,
            }
        }
    }

    /// Consume a (possibly nested) block comment starting at `/*`
    fn block_comment(&mut self) {
        let comment_start = self.current;
        let comment_start_line = self.line;

        self.open_comment();
        while self.comment_level > 0 && !self.is_at_end() {
            match (self.peek(), self.peek_next()) {
                ('/', Some('*')) => self.open_comment(),
                ('*', Some('/')) => {
                    self.advance();
                    self.advance();
                    self.comment_level -= 1;
                    tracing::trace!("comment level decreased to {}", self.comment_level);
                }
                ('\n', _) => {
                    self.advance();
                    self.line += 1;
                }
                _ => {
                    self.advance();
                }
            }
        }

        if self.comment_level > 0 {
            self.comment_level = 0;
            let span = Span::new(comment_start, self.current);
            tracing::debug!(line = comment_start_line, "unterminated block comment");
            self.diagnostics.push(
                Diagnostic::error_with_code(
                    error_codes::UNTERMINATED_COMMENT,
                    "Unterminated block comment",
                    span,
                )
                .with_source(&self.source, Span::new(comment_start, comment_start + 2))
                .with_label("comment starts here")
                .with_help("add '*/' to close the block comment"),
            );
        }
    }

    /// Skip a `*/` that closes no comment, keeping it as a warning
    fn stray_comment_terminator(&mut self) {
        tracing::warn!(
            line = self.line,
            "comment level is already 0, stray '*/' ignored"
        );
        let span = Span::new(self.current, self.current + 2);
        self.advance();
        self.advance();
        self.diagnostics.push(
            Diagnostic::warning_with_code(
                error_codes::STRAY_COMMENT_TERMINATOR,
                "Stray '*/' outside of a block comment",
                span,
            )
            .with_source(&self.source, span)
            .with_label("ignored")
            .with_note("block comments nest, so each '*/' closes one open '/*'"),
        );
    }

    fn open_comment(&mut self) {
        self.advance();
        self.advance();
        self.comment_level += 1;
        tracing::trace!("comment level increased to {}", self.comment_level);
    }

    // === Character navigation ===

    /// Advance to next character and return it
    pub(super) fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Peek at current character without advancing
    pub(super) fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Peek at next character (current + 1)
    pub(super) fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    /// Check if current character matches expected, and advance if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Check if we've reached the end of source
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    // === Token creation ===

    /// Create a token with the given kind and lexeme
    pub(super) fn make_token(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Span::new(self.start_pos, self.current))
    }

    /// Create an error token and record a diagnostic with a specific code
    pub(super) fn error_token_with_code(&mut self, code: &str, message: &str) -> Token {
        let span = Span::new(self.start_pos, self.current.max(self.start_pos + 1));

        self.diagnostics.push(
            Diagnostic::error_with_code(code, message, span)
                .with_source(&self.source, span)
                .with_label("lexer error"),
        );

        Token::new(TokenKind::Error, message, span)
    }

    /// Create an error token for invalid/unexpected characters
    pub(super) fn error_token(&mut self, message: &str) -> Token {
        self.error_token_with_code(error_codes::UNEXPECTED_CHARACTER, message)
    }
}
