//! End-to-end tests for the `arglistc` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Write;
use std::process::{Command, Output};

use arglist_check::{ARITY_ENV, STRICT_TYPES_ENV};
use tempfile::NamedTempFile;

fn description(json: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(json.as_bytes()).expect("write temp file");
    file
}

fn arglistc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arglistc"))
        .args(args)
        .env_remove(ARITY_ENV)
        .env_remove(STRICT_TYPES_ENV)
        .env_remove("RUST_LOG")
        .output()
        .expect("run arglistc")
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("utf-8 temp path")
}

const UNPACKED: &str = r#"{
    "params": [{ "name": "arg0" }, { "name": "arg1", "variadic": true }],
    "args": ["arg0", ["item0", "item1"]]
}"#;

const SURPLUS: &str = r#"{
    "params": [{ "name": "arg0" }],
    "args": ["arg0", "arg1"]
}"#;

#[test]
fn valid_description_exits_zero() {
    let file = description(UNPACKED);
    let output = arglistc(&["check", path(&file)]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("OK: "));
    assert!(stdout.contains("(1 call checked)"));
}

#[test]
fn surplus_argument_fails_by_default() {
    let file = description(SURPLUS);
    let output = arglistc(&["check", path(&file), "--color=never"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error[A0003]: unexpected extra argument at position 1"));
}

#[test]
fn lenient_flag_accepts_surplus_argument() {
    let file = description(SURPLUS);
    let output = arglistc(&["check", path(&file), "--lenient", "--color=never"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("warning[A0003]: unexpected extra argument at position 1"));
}

#[test]
fn environment_selects_lenient_policy() {
    let file = description(SURPLUS);
    let output = Command::new(env!("CARGO_BIN_EXE_arglistc"))
        .args(["check", path(&file)])
        .env(ARITY_ENV, "lenient")
        .env_remove(STRICT_TYPES_ENV)
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn invalid_environment_is_reported() {
    let file = description(SURPLUS);
    let output = Command::new(env!("CARGO_BIN_EXE_arglistc"))
        .args(["check", path(&file)])
        .env(ARITY_ENV, "sometimes")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid arity policy `sometimes`"));
}

#[test]
fn json_format_writes_diagnostics_to_stdout() {
    let file = description(SURPLUS);
    let output = arglistc(&["check", path(&file), "--format=json"]);

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["code"], "A0003");
    assert_eq!(parsed[0]["severity"], "error");
}

#[test]
fn missing_file_is_reported() {
    let output = arglistc(&["check", "/nonexistent/calls.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot find file"));
}

#[test]
fn explain_prints_docs() {
    let output = arglistc(&["explain", "A0001"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# A0001"));
}

#[test]
fn explain_rejects_unknown_code() {
    let output = arglistc(&["explain", "Z9999"]);
    assert_eq!(output.status.code(), Some(1));
}
