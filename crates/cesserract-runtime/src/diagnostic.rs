//! Diagnostic system for errors and warnings
//!
//! Lexer, parser and interpreter faults all flow through the unified
//! Diagnostic type so the CLI can render them as text or JSON.

pub mod error_codes;

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Fatal error that prevents execution
    Error,
    /// Warning that doesn't prevent execution
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message (error or warning)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Severity level
    pub level: DiagnosticLevel,
    /// Error code (e.g., "CS0002")
    pub code: String,
    /// Main diagnostic message
    pub message: String,
    /// File path
    pub file: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Length of error span
    pub length: usize,
    /// Source line string
    pub snippet: String,
    /// Short label for caret range
    pub label: String,
    /// Additional notes (optional)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
    /// Suggested fix (optional)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl Diagnostic {
    fn with_level(
        level: DiagnosticLevel,
        code: impl Into<String>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            diag_version: DIAG_VERSION,
            level,
            code: code.into(),
            message: message.into(),
            file: "<unknown>".to_string(),
            line: 1,
            column: span.start + 1,
            length: span.len(),
            snippet: String::new(),
            label: String::new(),
            notes: Vec::new(),
            help: None,
        }
    }

    /// Create a new error diagnostic with code
    pub fn error_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::with_level(DiagnosticLevel::Error, code, message, span)
    }

    /// Create a new warning diagnostic with code
    pub fn warning_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::with_level(DiagnosticLevel::Warning, code, message, span)
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Resolve line, column and snippet of `span` against `source`
    pub fn with_source(mut self, source: &str, span: Span) -> Self {
        let (line, column) = span.line_col(source);
        self.line = line;
        self.column = column;
        self.snippet = source.lines().nth(line - 1).unwrap_or("").to_string();
        self
    }

    /// Set the label (caret description)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Whether this diagnostic blocks execution
    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[CS0002]: Undefined variable
        output.push_str(&format!(
            "{}[{}]: {}\n",
            self.level, self.code, self.message
        ));

        // Location: --> path/to/file.cst:12:9
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.file, self.line, self.column
        ));

        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("{:>2} | {}\n", self.line, self.snippet));

            if self.length > 0 {
                let padding = " ".repeat(self.column.saturating_sub(1));
                let carets = "^".repeat(self.length);
                output.push_str(&format!("   | {}{}", padding, carets));

                if !self.label.is_empty() {
                    output.push_str(&format!(" {}", self.label));
                }
                output.push('\n');
            }
        }

        for note in &self.notes {
            output.push_str(&format!("   = note: {}\n", note));
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_human_string())
    }
}

/// Sort diagnostics by level (errors first), then by location
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| match (a.level, b.level) {
        (DiagnosticLevel::Error, DiagnosticLevel::Warning) => std::cmp::Ordering::Less,
        (DiagnosticLevel::Warning, DiagnosticLevel::Error) => std::cmp::Ordering::Greater,
        _ => a
            .file
            .cmp(&b.file)
            .then(a.line.cmp(&b.line))
            .then(a.column.cmp(&b.column)),
    });
}
