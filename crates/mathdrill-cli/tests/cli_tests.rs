//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mathdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mathdrill").unwrap()
}

/// Answers for `n` rounds; the values do not need to be correct for the
/// session to complete.
fn canned_answers(n: usize) -> String {
    "7\n".repeat(n)
}

/// The single session log written under `dir/Results`.
fn session_log_in(dir: &Path) -> PathBuf {
    let results = dir.join("Results");
    let mut files: Vec<PathBuf> = std::fs::read_dir(&results)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1, "expected exactly one session log");
    files.pop().unwrap()
}

#[test]
fn play_writes_one_row_per_round() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "alice", "--rounds", "3", "--difficulty", "2"])
        .write_stdin(canned_answers(3))
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculate \"X\""))
        .stdout(predicate::str::contains("Results saved to:"));

    let log = session_log_in(dir.path());
    let name = log.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Results_"));
    assert!(name.ends_with(".csv"));

    let content = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three rows");
    assert!(lines[0].starts_with("Op,Left,Right,Result,"));
    assert!(lines[1].ends_with(",alice"));
}

#[test]
fn play_prompts_for_missing_name() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--rounds", "1", "--difficulty", "2"])
        .write_stdin(format!("bob\n{}", canned_answers(1)))
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter your name"));
}

#[test]
fn non_integer_answer_is_reprompted() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "alice", "--rounds", "1", "--difficulty", "2"])
        .write_stdin("not a number\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not an integer! Try again."));

    // The rejected input is not logged as an attempt.
    let content = std::fs::read_to_string(session_log_in(dir.path())).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn end_of_input_is_fatal() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "alice", "--rounds", "2", "--difficulty", "2"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn invalid_difficulty_fails_before_playing() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "alice", "--rounds", "1", "--difficulty", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("difficulty bound must be at least 1"));

    assert!(!dir.path().join("Results").exists());
}

#[test]
fn zero_rounds_fails() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "alice", "--rounds", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("round count must be at least 1"));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mathdrill.toml"),
        "default_rounds = 2\ndefault_difficulty = 2\n",
    )
    .unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "carol"])
        .write_stdin(canned_answers(2))
        .assert()
        .success();

    let content = std::fs::read_to_string(session_log_in(dir.path())).unwrap();
    assert_eq!(content.lines().count(), 3, "header plus two rows");
}

#[test]
fn nonexistent_config_fails() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "x", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn stats_summarizes_a_session_log() {
    let dir = TempDir::new().unwrap();

    mathdrill()
        .current_dir(dir.path())
        .args(["play", "--name", "dora", "--rounds", "4", "--difficulty", "3"])
        .write_stdin(canned_answers(4))
        .assert()
        .success();

    let log = session_log_in(dir.path());

    mathdrill()
        .arg("stats")
        .arg("--log")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Player: dora"))
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn stats_nonexistent_log_fails() {
    mathdrill()
        .args(["stats", "--log", "no_such_file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn help_output() {
    mathdrill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic quiz generator"));
}

#[test]
fn version_output() {
    mathdrill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathdrill"));
}
