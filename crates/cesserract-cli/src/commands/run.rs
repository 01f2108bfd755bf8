//! Run command - execute Cesserract source files

use super::{print_diagnostics, Reported};
use anyhow::Result;
use cesserract_runtime::{error_codes, Cesserract, Diagnostic};

/// Run a Cesserract source file
///
/// Prints the lines written by `print` statements and then the run report to
/// stdout. A runtime fault prints the fatal error block to stderr.
pub fn run(file_path: &str, json: bool) -> Result<()> {
    let mut runtime = Cesserract::new();
    let outcome = runtime.run_file(file_path);
    for line in runtime.take_output() {
        println!("{}", line);
    }

    match outcome {
        Ok(report) => {
            print!("{}", report);
            Ok(())
        }
        Err(diagnostics) => {
            match runtime_fault(&diagnostics) {
                Some(fault) if !json => eprint!("{}", fatal_block(&fault.message)),
                _ => print_diagnostics(&diagnostics, file_path, json),
            }
            Err(Reported.into())
        }
    }
}

/// The diagnostic of a run that started and then aborted
fn runtime_fault(diagnostics: &[Diagnostic]) -> Option<&Diagnostic> {
    match diagnostics {
        [fault] if error_codes::is_runtime(&fault.code) => Some(fault),
        _ => None,
    }
}

/// Text shown when a run aborts on a runtime fault
pub fn fatal_block(reason: &str) -> String {
    format!(
        "An error occurred during execution. Reason:\n{}\nProgram terminated.\n",
        reason
    )
}
