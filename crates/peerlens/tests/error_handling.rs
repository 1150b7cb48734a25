//! E2E tests for CLI error handling.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn peerlens_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_peerlens"));
    cmd.env_remove("PEERLENS_LOG");
    cmd
}

#[test]
fn missing_input_file_fails_with_hint() {
    peerlens_cmd()
        .args(["analyze", "definitely-missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading input definitely-missing.txt"))
        .stderr(predicate::str::contains("Hints:"));
}

#[test]
fn invalid_kind_is_rejected_by_clap() {
    peerlens_cmd()
        .args(["analyze", "--kind", "poetry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'poetry'"));
}

#[test]
fn malformed_corpus_fails() {
    let dir = tempdir().unwrap();
    let corpus = dir.path().join("corpus.json");
    fs::write(&corpus, "{not json").unwrap();

    peerlens_cmd()
        .args(["similarity", "--corpus"])
        .arg(&corpus)
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing corpus file"))
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn invalid_settings_file_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("peerlens.toml");
    fs::write(&config, "[similarity]\nspan_threshold = 3.0\n").unwrap();

    peerlens_cmd()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("span_threshold"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let assert = peerlens_cmd()
        .args(["-vv", "analyze"])
        .write_stdin("Some text.")
        .assert()
        .success()
        .stderr(predicate::str::contains("analyzed text"));
    let stdout = assert.get_output().stdout.clone();
    serde_json::from_slice::<serde_json::Value>(&stdout).expect("stdout stays pure JSON");
}
