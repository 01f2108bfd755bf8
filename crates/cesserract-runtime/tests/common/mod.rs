//! Shared test helpers for Cesserract integration tests

#![allow(dead_code)]

use cesserract_runtime::{Cesserract, Diagnostic, RunReport, Value};

pub use pretty_assertions::{assert_eq, assert_ne};

/// Run source that must succeed, returning the report and printed lines
pub fn run_ok(source: &str) -> (RunReport, Vec<String>) {
    let mut runtime = Cesserract::new();
    match runtime.run(source) {
        Ok(report) => (report, runtime.take_output()),
        Err(diagnostics) => panic!("Expected success, got {:?}", diagnostics),
    }
}

/// Run source that must fail, returning the single diagnostic and printed lines
pub fn run_err(source: &str) -> (Diagnostic, Vec<String>) {
    let mut runtime = Cesserract::new();
    match runtime.run(source) {
        Ok(report) => panic!("Expected failure, got report:\n{}", report),
        Err(mut diagnostics) => {
            assert_eq!(diagnostics.len(), 1, "Expected one diagnostic: {:?}", diagnostics);
            (diagnostics.remove(0), runtime.take_output())
        }
    }
}

/// Assert that source returns the given value
pub fn assert_result(source: &str, expected: Value) {
    let (report, _) = run_ok(source);
    assert_eq!(report.result, Some(expected), "source: {}", source);
}

/// Assert that source aborts with the given error code
pub fn assert_error_code(source: &str, code: &str) {
    let (diagnostic, _) = run_err(source);
    assert_eq!(diagnostic.code, code, "source: {}\n{}", source, diagnostic);
}

/// Value of a root variable after a successful run
pub fn global(report: &RunReport, name: &str) -> Value {
    report
        .globals
        .iter()
        .find(|v| v.name == name)
        .map(|v| v.value.clone())
        .unwrap_or_else(|| panic!("No global named '{}' in {:?}", name, report.globals))
}
