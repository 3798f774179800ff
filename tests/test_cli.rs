//! Tests for the `boolcalc` command-line shell
#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn boolcalc(args: &[&str], rust_log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_boolcalc"));
    command.args(args).env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        command.env("RUST_LOG", filter);
    }
    command.output().expect("failed to run boolcalc")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_simplifies_argument() {
    let output = boolcalc(&["A & A"], None);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Original: A & A", "Simplified: A"]);
}

#[test]
fn test_cli_reports_invalid_expression() {
    let output = boolcalc(&["(A"], None);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec!["evaluation error", "invalid expression"]
    );
}

#[test]
fn test_cli_quiet_by_default() {
    let output = boolcalc(&["A & A"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("rule fired"), "unexpected logs: {}", stderr);
}

#[test]
fn test_cli_honours_rust_log() {
    let output = boolcalc(&["A & A"], Some("debug"));
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rule fired"), "missing debug logs: {}", stderr);
}

#[test]
fn test_cli_verbose_flag() {
    let output = boolcalc(&["-v", "A & A"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rule fired"), "missing debug logs: {}", stderr);
}
