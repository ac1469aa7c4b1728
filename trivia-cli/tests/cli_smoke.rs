//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// Command isolated from any developer `.env` or database settings.
fn trivia() -> (Command, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("TRIVIA_BIND")
        .env_remove("TRIVIA_PER_PAGE");
    (cmd, dir)
}

#[test]
fn test_help_lists_commands() {
    let (mut cmd, _dir) = trivia();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let (mut cmd, _dir) = trivia();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Questions per page"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn test_serve_rejects_zero_page_size() {
    let (mut cmd, _dir) = trivia();
    cmd.arg("serve").arg("--memory").arg("--per-page").arg("0");

    cmd.assert().failure().stderr(predicate::str::contains("--per-page"));
}

#[test]
fn test_serve_without_database_fails() {
    let (mut cmd, _dir) = trivia();
    cmd.arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_migrate_without_database_fails() {
    let (mut cmd, _dir) = trivia();
    cmd.arg("migrate").arg("--seed-categories");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}
