//! Check command - lex and parse source files without executing

use super::{print_diagnostics, read_source, Reported};
use anyhow::Result;
use cesserract_runtime::Cesserract;

/// Check a Cesserract source file for lexical and syntax errors
///
/// Warnings are reported but do not fail the check.
pub fn run(file_path: &str, json: bool) -> Result<()> {
    let source = read_source(file_path)?;

    match Cesserract::new().check(&source) {
        Ok(warnings) => {
            print_diagnostics(&warnings, file_path, json);
            if warnings.is_empty() {
                println!("{}: No errors found", file_path);
            } else {
                println!("{}: No errors found, {} warning(s)", file_path, warnings.len());
            }
            Ok(())
        }
        Err(diagnostics) => {
            print_diagnostics(&diagnostics, file_path, json);
            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            eprintln!("{}: {} error(s) found", file_path, errors);
            Err(Reported.into())
        }
    }
}
