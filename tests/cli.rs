mod common;

use common::{EXPECTED_EN, EXPECTED_KO};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_in(dir: &Path, rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lambda_lesson"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        cmd.env("RUST_LOG", filter);
    }
    cmd.output().unwrap()
}

#[test]
fn test_default_run_prints_transcript_and_logs_to_stderr() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), Some("debug"));

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_KO);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no config file, using defaults"));
    assert!(stderr.contains("settings in effect"));
    assert!(stderr.contains("batch operations"));
    assert!(stderr.contains("transcript written"));
}

#[test]
fn test_quiet_by_default() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), None);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_KO);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_config_file_sets_language_and_log_filter() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("lambda_lesson.toml"),
        "language = \"en\"\nlog_filter = \"info\"\n",
    )
    .unwrap();
    let output = run_in(dir.path(), None);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_EN);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("settings in effect"));
    assert!(stderr.contains("lambda_lesson.toml"));
    assert!(!stderr.contains("batch operations"));
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lambda_lesson.toml"), "colour = 1\n").unwrap();
    let output = run_in(dir.path(), None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("lesson run failed"));
    assert!(stderr.contains("Invalid config file"));
}
