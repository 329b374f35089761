//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();
    t.fake_gh();

    let output = t.cmd().args(["--verbose", "list"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("hoist") || !out.is_empty());
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_hoist") || out.contains("complete"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(
        out.contains("#compdef") || out.contains("_hoist"),
        "zsh completion should contain zsh-specific syntax"
    );
}

#[test]
fn test_completions_fish() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(
        out.contains("complete") && out.contains("hoist"),
        "fish completion should contain fish-specific syntax"
    );
}

#[test]
fn test_completions_powershell() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["completions", "power-shell"])
        .output()
        .unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(
        out.contains("Register-ArgumentCompleter") || out.contains("param"),
        "powershell completion should contain PowerShell-specific syntax"
    );
}
