//! Tests for `kvenv test`.

use crate::support::*;

#[test]
fn test_connection_reports_secret_count() {
    let t = Test::with_secrets(&[("AI-key", "a"), ("DB-user", "b")]);

    let output = t.test_connection();
    assert_success(&output);
    assert_stdout_contains(&output, "Testing connection... ok");
    assert_stdout_contains(&output, "found 2 secrets");
}

#[test]
fn test_connection_to_empty_vault() {
    let t = Test::with_secrets(&[]);

    let output = t.test_connection();
    assert_success(&output);
    assert_stdout_contains(&output, "found 0 secrets");
}

#[test]
fn test_connection_failure_prints_troubleshooting() {
    let t = Test::new();

    let output = t.test_connection();
    assert_failure(&output);
    assert_stdout_contains(&output, "failed");
    assert_stderr_contains(&output, "vault file not found");
    assert_stderr_contains(&output, "DISABLE_SSL_VERIFY=true");
    assert_stderr_contains(&output, "az login");
}
