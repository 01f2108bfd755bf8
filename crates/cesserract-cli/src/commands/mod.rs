pub mod ast;
pub mod check;
pub mod run;
pub mod tokens;

use anyhow::{Context, Result};
use cesserract_runtime::Diagnostic;
use std::{fmt, fs};

/// A failure whose diagnostics were already written to stderr
///
/// `main` exits non-zero on it without printing anything more.
#[derive(Debug)]
pub struct Reported;

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("diagnostics reported")
    }
}

impl std::error::Error for Reported {}

/// Read a source file for a command
pub(crate) fn read_source(file_path: &str) -> Result<String> {
    fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))
}

/// Print diagnostics to stderr, as JSON or human-readable reports
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic], file_path: &str, json: bool) {
    for diag in diagnostics {
        let diag = diag.clone().with_file(file_path);
        if json {
            match diag.to_json_compact() {
                Ok(line) => eprintln!("{}", line),
                Err(e) => eprintln!("failed to serialize diagnostic: {}", e),
            }
        } else {
            eprint!("{}", diag.to_human_string());
        }
    }
}
