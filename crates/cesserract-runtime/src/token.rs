//! Token types for lexical analysis
//!
//! Defines all token types recognized by the Cesserract lexer.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Token type produced by the lexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of this token (unescaped contents for strings)
    pub lexeme: String,
    /// Source location
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Render the token as a scanner log line, e.g. `Number Literal: 42`
    ///
    /// Tokens whose kind fully determines their text (keywords, operators,
    /// punctuation) are rendered by description alone.
    pub fn describe(&self) -> String {
        if self.kind.carries_value() {
            format!("{}: {}", self.kind.description(), self.lexeme)
        } else {
            self.kind.description().to_string()
        }
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Number literal (42)
    Number,
    /// String literal ("hello")
    String,
    /// `true` keyword
    True,
    /// `false` keyword
    False,
    /// Identifier
    Identifier,

    // Keywords
    /// `let` keyword (variable declaration)
    Let,
    /// `fn` keyword (function declaration)
    Fn,
    /// `if` keyword
    If,
    /// `while` keyword
    While,
    /// `return` keyword
    Return,
    /// `print` keyword (variable dump)
    Print,
    /// `and` keyword (logical and)
    And,
    /// `or` keyword (logical or)
    Or,
    /// `xor` keyword (logical exclusive or)
    Xor,
    /// `not` keyword (logical not)
    Not,

    // Operators
    /// `+` (addition)
    Plus,
    /// `-` (subtraction or negation)
    Minus,
    /// `*` (multiplication)
    Star,
    /// `/` (division)
    Slash,
    /// `%` (modulo)
    Percent,
    /// `==` (equality)
    EqualEqual,
    /// `!=` (inequality)
    BangEqual,
    /// `<` (less than)
    Less,
    /// `<=` (less than or equal)
    LessEqual,
    /// `>` (greater than)
    Greater,
    /// `>=` (greater than or equal)
    GreaterEqual,

    // Punctuation
    /// `=` (assignment)
    Equal,
    /// `(` (left parenthesis)
    LeftParen,
    /// `)` (right parenthesis)
    RightParen,
    /// `{` (body opening brace)
    LeftBrace,
    /// `}` (body closing brace)
    RightBrace,
    /// `;` (statement separator)
    Semicolon,
    /// `,` (comma)
    Comma,

    // Special
    /// End of file
    Eof,
    /// Lexer error
    Error,
}

impl TokenKind {
    /// Check if a string is a keyword and return its token kind
    pub fn is_keyword(s: &str) -> Option<TokenKind> {
        match s {
            "let" => Some(TokenKind::Let),
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "while" => Some(TokenKind::While),
            "return" => Some(TokenKind::Return),
            "print" => Some(TokenKind::Print),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "xor" => Some(TokenKind::Xor),
            "not" => Some(TokenKind::Not),
            _ => None,
        }
    }

    /// Whether this kind is a reserved word
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Fn
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::Print
                | TokenKind::True
                | TokenKind::False
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Xor
                | TokenKind::Not
        )
    }

    fn carries_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::Identifier | TokenKind::Error
        )
    }

    /// Human-readable name used in the token log
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Number => "Number Literal",
            TokenKind::String => "Text Literal",
            TokenKind::True => "Boolean Literal (True)",
            TokenKind::False => "Boolean Literal (False)",
            TokenKind::Identifier => "Identifier",
            TokenKind::Let => "Variable Declaration Keyword",
            TokenKind::Fn => "Function Declaration Keyword",
            TokenKind::If => "If Control Flow Operator",
            TokenKind::While => "While Control Flow Operator",
            TokenKind::Return => "Program Termination Keyword",
            TokenKind::Print => "Print Keyword",
            TokenKind::And => "AND Logic Operator",
            TokenKind::Or => "OR Logic Operator",
            TokenKind::Xor => "XOR Logic Operator",
            TokenKind::Not => "NOT Logic Operator",
            TokenKind::Plus => "Plus Arithmetic Operator",
            TokenKind::Minus => "Minus Arithmetic Operator",
            TokenKind::Star => "Multiply Arithmetic Operator",
            TokenKind::Slash => "Divide Arithmetic Operator",
            TokenKind::Percent => "Modulo Arithmetic Operator",
            TokenKind::EqualEqual => "Equality Operator",
            TokenKind::BangEqual => "Inequality Operator",
            TokenKind::Less => "Less Than Operator",
            TokenKind::LessEqual => "Less Than Or Equal Operator",
            TokenKind::Greater => "More Than Operator",
            TokenKind::GreaterEqual => "More Than Or Equal Operator",
            TokenKind::Equal => "Variable Assignment Operator",
            TokenKind::LeftParen => "Opening Parenthesis",
            TokenKind::RightParen => "Closing Parenthesis",
            TokenKind::LeftBrace => "Body Opening Brace",
            TokenKind::RightBrace => "Body Closing Brace",
            TokenKind::Semicolon => "Statements Separator",
            TokenKind::Comma => "Arguments Separator",
            TokenKind::Eof => "End of File",
            TokenKind::Error => "Lexer Error",
        }
    }

    /// Get the string representation of this token kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Identifier => "identifier",
            TokenKind::Let => "let",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Print => "print",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Xor => "xor",
            TokenKind::Not => "not",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::EqualEqual => "==",
            TokenKind::BangEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Equal => "=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "error",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
