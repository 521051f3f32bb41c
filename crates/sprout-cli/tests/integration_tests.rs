//! Integration tests for the sprout binary.
//!
//! The generator itself is interactive; these tests cover everything that
//! can be checked without a terminal.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sprout() -> Command {
    let mut cmd = Command::cargo_bin("sprout").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    sprout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    sprout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_help_and_fails() {
    sprout()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_generate_help_lists_patterns() {
    sprout()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Public Collection"))
        .stdout(predicate::str::contains("Private Collection"))
        .stdout(predicate::str::contains("Global"));
}

#[test]
fn test_completions_bash() {
    sprout()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    sprout().arg("scaffold").assert().code(2);
}

#[test]
fn test_generate_without_terminal_writes_nothing() {
    let temp = TempDir::new().unwrap();

    sprout()
        .args(["-C"])
        .arg(temp.path())
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prompt failed"));

    assert!(!temp.path().join("src").exists());
}
