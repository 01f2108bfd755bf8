//! End-to-end programs checked against their rendered run reports

mod common;

use cesserract_runtime::{error_codes, Cesserract};
use common::*;
use common::assert_eq;

fn report(source: &str) -> String {
    let (report, output) = run_ok(source);
    let mut rendered = String::new();
    for line in output {
        rendered.push_str(&line);
        rendered.push('\n');
    }
    rendered.push_str(&report.to_string());
    rendered
}

#[test]
fn scenario_sum_of_declarations() {
    insta::assert_snapshot!(report("let x = 2; let y = 3; let z = x + y;"), @r"
    Executed without result.
    x = Number: 2
    y = Number: 3
    z = Number: 5
    ");
}

#[test]
fn scenario_function_result() {
    let source = "
        fn f(a) { return a * a; }
        let x = 4;
        let r = f(x);
        return r;
    ";
    insta::assert_snapshot!(report(source), @r"
    Executed with result: Number: 16
    x = Number: 4
    r = Number: 16
    ");
}

#[test]
fn scenario_pass_through_not_never_flips() {
    // `not done` evaluates as `done`, so the loop keeps going until the cap
    let source = "let done = true; while (not done) { done = true; }";
    let (diagnostic, _) = run_err(source);
    assert_eq!(diagnostic.code, error_codes::ITERATION_LIMIT);
    assert_eq!(diagnostic.line, 1);
}

#[test]
fn scenario_undeclared_variable_aborts_without_report() {
    let mut runtime = Cesserract::new();
    let diagnostics = runtime.run("let a = 1;\nlet b = a + c;\nprint b;").unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "The value 'c' does not exist.");
    assert_eq!(diagnostics[0].line, 2);
    assert!(runtime.output().is_empty());
}

#[test]
fn scenario_mixed_kinds_and_printing() {
    let source = r#"
        let greeting = "hello";
        let count = 0;
        let big = false;
        while (count < 3) {
            count = count + 1;
            print count;
        }
        if (count >= 3) { big = true; }
        print greeting;
    "#;
    insta::assert_snapshot!(report(source), @r"
    count = Number: 1
    count = Number: 2
    count = Number: 3
    greeting = Text: hello
    Executed without result.
    greeting = Text: hello
    count = Number: 3
    big = Logic: True
    ");
}

#[test]
fn scenario_nested_comments_are_ignored() {
    let source = "/* outer /* inner */ still comment */ let a = 1; // trailing\nreturn a;";
    insta::assert_snapshot!(report(source), @r"
    Executed with result: Number: 1
    a = Number: 1
    ");
}
