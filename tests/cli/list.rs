//! Tests for the list command.

use crate::support::*;

#[test]
fn test_list_prints_names() {
    let t = Test::new();
    t.fake_gh_with(GhBehavior::with_names(REMOTE_NAMES));

    let output = t.list();
    assert_success(&output);
    for name in REMOTE_NAMES {
        assert_stdout_contains(&output, name);
    }
    assert_stdout_contains(&output, "3 secrets");
}

#[test]
fn test_list_empty_registry() {
    let t = Test::new();
    t.fake_gh();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets registered");
}

#[test]
fn test_list_json_output() {
    let t = Test::new();
    t.fake_gh_with(GhBehavior::with_names(&["API_KEY", "DB_PASS"]));

    let output = t.list_json();
    assert_success(&output);

    let names: Vec<String> = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(names, vec!["API_KEY", "DB_PASS"]);
}

#[test]
fn test_list_json_empty_is_valid_json() {
    let t = Test::new();
    t.fake_gh();

    let output = t.list_json();
    assert_success(&output);

    let names: Vec<String> = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert!(names.is_empty());
}

#[test]
fn test_list_fails_when_client_fails() {
    let t = Test::new();
    t.fake_gh_with(GhBehavior {
        fail_list: true,
        ..GhBehavior::default()
    });

    // Unlike push's closing report, listing is this command's whole job
    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "secret list");
}
