//! CLI surface tests for triagectl
//!
//! Tests the binary end to end:
//! - triagectl --help                lists the diagnose command
//! - triagectl diagnose (no input)   fails with the missing-input exit code
//!   when stdin is not a terminal, and the invocation is logged

use std::process::{Command, Stdio};

#[test]
fn help_lists_diagnose() {
    let output = Command::new(env!("CARGO_BIN_EXE_triagectl"))
        .arg("--help")
        .output()
        .expect("Failed to run triagectl");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("diagnose"));
}

#[test]
fn diagnose_without_input_fails_with_usage_code() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("ctl.jsonl");

    let output = Command::new(env!("CARGO_BIN_EXE_triagectl"))
        .arg("diagnose")
        .stdin(Stdio::null())
        .env("TRIAGECTL_LOG_FILE", &log)
        .output()
        .expect("Failed to run triagectl");

    assert_eq!(output.status.code(), Some(64));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("requires a file, directory, or text"));

    // the failed invocation still landed in the log
    let raw = std::fs::read_to_string(&log).unwrap();
    assert!(raw.contains("\"missing-input\""));
    assert!(raw.contains("\"exit_code\":64"));
}
