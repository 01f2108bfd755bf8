//! Cesserract runtime API for embedding

use crate::ast::Program;
use crate::diagnostic::{error_codes, sort_diagnostics, Diagnostic};
use crate::interpreter::{Interpreter, RunReport};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::span::Span;
use crate::token::Token;
use std::path::Path;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, Vec<Diagnostic>>;

/// Cesserract runtime instance
///
/// Drives the lex, parse and run pipeline over a source text and keeps the
/// lines written by `print` statements of the last run, including runs that
/// ended in a runtime error.
///
/// # Examples
///
/// ```
/// use cesserract_runtime::{Cesserract, Value};
///
/// let mut runtime = Cesserract::new();
/// let report = runtime.run("let x = 2; return x * 21;").unwrap();
/// assert_eq!(report.result, Some(Value::Number(42)));
/// ```
#[derive(Debug, Default)]
pub struct Cesserract {
    output: Vec<String>,
}

impl Cesserract {
    /// Create a new runtime instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `source` into tokens, failing on any lexical error
    ///
    /// Warnings alone do not fail the scan; see [`Cesserract::check`].
    pub fn tokenize(&self, source: &str) -> RuntimeResult<Vec<Token>> {
        self.scan(source).map(|(tokens, _)| tokens)
    }

    /// Scan and parse `source` into a program
    pub fn parse(&self, source: &str) -> RuntimeResult<Program> {
        self.front_end(source).map(|(program, _)| program)
    }

    /// Scan and parse `source` without running it
    ///
    /// Returns the warnings of a program that would run, or every diagnostic,
    /// errors first, when it would not.
    ///
    /// ```
    /// use cesserract_runtime::Cesserract;
    ///
    /// let warnings = Cesserract::new().check("let a = 1; */").unwrap();
    /// assert_eq!(warnings[0].code, "CW0001");
    /// ```
    pub fn check(&self, source: &str) -> RuntimeResult<Vec<Diagnostic>> {
        self.front_end(source).map(|(_, warnings)| warnings)
    }

    fn scan(&self, source: &str) -> RuntimeResult<(Vec<Token>, Vec<Diagnostic>)> {
        let (tokens, diagnostics) = Lexer::new(source).tokenize();
        if diagnostics.iter().any(Diagnostic::is_error) {
            Err(sorted(diagnostics))
        } else {
            Ok((tokens, diagnostics))
        }
    }

    fn front_end(&self, source: &str) -> RuntimeResult<(Program, Vec<Diagnostic>)> {
        let (tokens, mut warnings) = self.scan(source)?;
        let (program, diagnostics) = Parser::new(tokens).with_source(source).parse();
        if diagnostics.is_empty() {
            Ok((program, warnings))
        } else {
            warnings.extend(diagnostics);
            Err(sorted(warnings))
        }
    }

    /// Parse and execute `source`
    ///
    /// A runtime error is reported as a single diagnostic; lines printed
    /// before it stay available through [`Cesserract::output`].
    pub fn run(&mut self, source: &str) -> RuntimeResult<RunReport> {
        self.output.clear();
        let program = self.parse(source)?;

        let mut interpreter = Interpreter::new();
        let outcome = interpreter.run(&program);
        self.output = interpreter.take_output();

        outcome.map_err(|error| {
            tracing::debug!(code = error.code(), "run aborted");
            vec![error.to_diagnostic(source)]
        })
    }

    /// Read and execute a source file
    ///
    /// Diagnostics are tagged with the file path.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> RuntimeResult<RunReport> {
        let path = path.as_ref();
        let source = read_source(path)?;
        let file = path.display().to_string();

        self.run(&source).map_err(|diagnostics| {
            diagnostics
                .into_iter()
                .map(|d| d.with_file(file.clone()))
                .collect()
        })
    }

    /// Lines printed by the last run
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Take the printed lines of the last run
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

fn sorted(mut diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    sort_diagnostics(&mut diagnostics);
    diagnostics
}

/// Read a source file, mapping I/O failures to a diagnostic
pub fn read_source(path: impl AsRef<Path>) -> RuntimeResult<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        vec![Diagnostic::error_with_code(
            error_codes::IO_ERROR,
            format!("Failed to read file: {}", e),
            Span::dummy(),
        )
        .with_file(path.display().to_string())]
    })
}
