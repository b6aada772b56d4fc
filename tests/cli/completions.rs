//! Tests for `firmware-secrets completions`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("firmware-secrets"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef firmware-secrets"));
}

#[test]
fn test_completions_need_no_secrets_file() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
    assert!(!t.dir.path().join("secrets.toml").exists());
}

#[test]
fn test_completions_unknown_shell_fails() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
