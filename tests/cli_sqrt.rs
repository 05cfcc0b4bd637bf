//! CLI tests for `greetings sqrt` and `greetings schema`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn greetings(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_greetings"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run greetings")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("utf8 stdout")
        .lines()
        .map(str::to_string)
        .collect()
}

fn write_settings(dir: &Path, body: &str) {
    fs::write(dir.join("greetings.json"), body).expect("write settings");
}

#[test]
fn sqrt_uses_default_budget_without_settings() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = greetings(temp.path(), &["sqrt", "2000", "--report"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "44.721359549995796");
    assert_eq!(lines[1], "iterations: 10");
    assert_eq!(lines[2], "termination: budget exhausted");
    assert!(lines[3].starts_with("residual: "));
}

#[test]
fn settings_budget_applies_when_no_flag_given() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_settings(temp.path(), r#"{ "approximation": { "iteration_budget": 50 } }"#);
    let output = greetings(temp.path(), &["sqrt", "2000", "--report"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[1], "iterations: 11");
    assert_eq!(lines[2], "termination: converged");
}

#[test]
fn budget_flag_overrides_settings_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_settings(temp.path(), r#"{ "approximation": { "iteration_budget": 50 } }"#);
    let output = greetings(temp.path(), &["sqrt", "2000", "--budget", "3", "--report"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[1], "iterations: 3");
    assert_eq!(lines[2], "termination: budget exhausted");
}

#[test]
fn tolerance_flag_stops_oscillation() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = greetings(
        temp.path(),
        &["sqrt", "2", "--budget", "50", "--tolerance", "1e-12", "--report"],
    );

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[1], "iterations: 6");
    assert_eq!(lines[2], "termination: converged");
}

#[test]
fn plain_output_is_a_single_line() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = greetings(temp.path(), &["sqrt", "4"]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["2".to_string()]);
}

#[test]
fn zero_budget_flag_is_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = greetings(temp.path(), &["sqrt", "4", "--budget", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("iteration budget must be > 0"), "stderr={stderr}");
}

#[test]
fn json_writes_non_finite_value_as_text() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = greetings(temp.path(), &["sqrt", "1e300", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json approximation");
    assert_eq!(value["value"], serde_json::json!("NaN"));
    assert_eq!(value["termination"], serde_json::json!("exhausted"));
}

#[test]
fn malformed_settings_fail_sqrt() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_settings(temp.path(), "{ not json");
    let output = greetings(temp.path(), &["sqrt", "4"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load settings"), "stderr={stderr}");
}

#[test]
fn schema_ignores_malformed_settings() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_settings(temp.path(), "{ not json");
    let output = greetings(temp.path(), &["schema"]);

    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).expect("schema json");
    assert!(schema["properties"]["approximation"].is_object());
}
