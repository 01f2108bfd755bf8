//! End-to-end tests for the `cesserract` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", source).unwrap();
    file
}

fn cesserract() -> Command {
    let mut cmd = Command::cargo_bin("cesserract").unwrap();
    cmd.env_remove("CESSERRACT_DIAGNOSTICS")
        .env_remove("CESSERRACT_JSON")
        .env_remove("CESSERRACT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_run_prints_report() {
    let file = source_file("let x = 2; let y = 3; let z = x + y;");
    cesserract()
        .arg("run")
        .arg(file.path())
        .assert()
        .success()
        .stdout("Executed without result.\nx = Number: 2\ny = Number: 3\nz = Number: 5\n");
}

#[test]
fn test_run_prints_output_before_report() {
    let file = source_file("fn sq(a) { return a * a; } let x = 4; print x; return sq(x);");
    cesserract()
        .args(["run"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("x = Number: 4\nExecuted with result: Number: 16\nx = Number: 4\n");
}

#[test]
fn test_run_fatal_error_block() {
    let file = source_file("let a = 1;\nprint a;\nlet b = c;");
    cesserract()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stdout("a = Number: 1\n")
        .stderr("An error occurred during execution. Reason:\nThe value 'c' does not exist.\nProgram terminated.\n");
}

#[test]
fn test_run_syntax_error_is_not_a_fatal_block() {
    let file = source_file("let a = ;");
    cesserract()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("error[CS1000]"))
        .stderr(predicate::str::contains("An error occurred").not())
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_run_json_diagnostic() {
    let file = source_file("let a = 1 / 0;");
    let output = cesserract()
        .arg("run")
        .arg("--json")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first_line = stderr.lines().next().unwrap();
    let json: serde_json::Value = serde_json::from_str(first_line).unwrap();
    assert_eq!(json["code"], "CS0005");
    assert_eq!(json["level"], "error");
}

#[test]
fn test_json_from_environment() {
    let file = source_file("let = 1;");
    cesserract()
        .env("CESSERRACT_DIAGNOSTICS", "json")
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"code\":\"CS1000\""));
}

#[test]
fn test_check_reports_syntax_errors() {
    let file = source_file("let a = 1\nlet b = 2;");
    cesserract()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CS1000]"))
        .stderr(predicate::str::contains("Expected ';' after declaration"))
        .stderr(predicate::str::contains("error(s) found"))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_check_valid_file() {
    let file = source_file("let a = 1;");
    cesserract()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No errors found"));
}

#[test]
fn test_ast_tree() {
    let file = source_file("let a = 1;");
    cesserract()
        .args(["ast", "--tree"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Tree Root\na = ...\n-Number: 1\n");
}

#[test]
fn test_ast_json_is_versioned() {
    let file = source_file("print a;");
    let output = cesserract().arg("ast").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ast_version"], 1);
}

#[test]
fn test_tokens_log() {
    let file = source_file("let x = 42;");
    cesserract()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "Variable Declaration Keyword\nIdentifier: x\nVariable Assignment Operator\n\
             Number Literal: 42\nStatements Separator\nEnd of File\n",
        );
}

#[test]
fn test_missing_file() {
    cesserract()
        .args(["run", "definitely/missing.cst"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CS9001]: Failed to read file"))
        .stderr(predicate::str::contains("definitely/missing.cst"));
}

#[test]
fn test_check_missing_file_reports_context() {
    cesserract()
        .args(["check", "definitely/missing.cst"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "Error: Failed to read source file: definitely/missing.cst",
        ));
}

#[test]
fn test_check_reports_stray_comment_warning() {
    let file = source_file("let a = 1;\n*/\n");
    cesserract()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No errors found, 1 warning(s)"))
        .stderr(predicate::str::contains("warning[CW0001]"))
        .stderr(predicate::str::contains("= note: block comments nest"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let file = source_file("fn f() { return 1; } let r = f();");
    cesserract()
        .args(["--verbose", "run"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Executed without result.\nr = Number: 1\n")
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_completions() {
    cesserract()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cesserract"));
}
