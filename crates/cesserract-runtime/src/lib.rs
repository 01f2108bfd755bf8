//! Cesserract Runtime - Core language implementation
//!
//! This library provides the Cesserract language runtime:
//! - Lexical analysis and parsing
//! - Tree-walking interpretation over an arena of scopes
//! - Structured diagnostics with stable error codes

/// Cesserract runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod ast_dump;
pub mod diagnostic;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod span;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use ast::{Program, VersionedProgram, AST_VERSION};
pub use diagnostic::{error_codes, sort_diagnostics, Diagnostic, DiagnosticLevel, DIAG_VERSION};
pub use interpreter::{apply_binary, Interpreter, RunReport, CALL_DEPTH_LIMIT, ITERATION_LIMIT};
pub use lexer::Lexer;
pub use parser::Parser;
pub use runtime::{read_source, Cesserract, RuntimeResult};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{RuntimeError, Value, ValueKind, Variable};
