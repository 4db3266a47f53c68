//! Tests for `kvenv get-prefix` and `kvenv get-prefix-save`.

use crate::support::*;
use std::fs;

#[test]
fn test_get_prefix_groups_exactly() {
    let t = Test::with_secrets(PREFIXED_SECRETS);

    let output = t.get_prefix("AI");
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "AI-api-key: sk-test-12345\nAI-model: gpt-4o\n"
    );
}

#[test]
fn test_get_prefix_is_case_sensitive() {
    let t = Test::with_secrets(PREFIXED_SECRETS);

    let output = t.get_prefix("ai");
    assert_success(&output);
    assert_eq!(stdout(&output), "ai-lowercase: not-in-AI\n");
}

#[test]
fn test_get_prefix_without_matches() {
    let t = Test::with_secrets(&[("solo", "value")]);

    let output = t.get_prefix("AI");
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets with prefix 'AI'");
}

#[test]
fn test_get_prefix_json() {
    let t = Test::with_secrets(PREFIXED_SECRETS);

    let output = t.run(&["get-prefix", "DB", "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["secrets"]["DB-user"], "admin");
    assert_eq!(json["secrets"]["DB-password"], "hunter2");
}

#[test]
fn test_get_prefix_save_writes_env_file() {
    let t = Test::with_secrets(PREFIXED_SECRETS);

    let output = t.get_prefix_save("AI");
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 2 secrets to .env");

    assert_eq!(t.read(".env"), "AI_API_KEY=sk-test-12345\nAI_MODEL=gpt-4o\n");
}

#[test]
fn test_get_prefix_save_custom_output() {
    let t = Test::with_secrets(PREFIXED_SECRETS);

    let output = t.run(&["get-prefix-save", "DB", "--output", "db.env"]);
    assert_success(&output);

    assert_eq!(t.read("db.env"), "DB_PASSWORD=hunter2\nDB_USER=admin\n");
    assert!(!t.path(".env").exists());
}

#[test]
fn test_get_prefix_save_truncates_existing_file() {
    let t = Test::with_secrets(PREFIXED_SECRETS);
    fs::write(t.path(".env"), "STALE=1\nOTHER=2\nMORE=3\n").unwrap();

    assert_success(&t.get_prefix_save("AI"));
    assert_success(&t.get_prefix_save("DB"));

    assert_eq!(t.read(".env"), "DB_PASSWORD=hunter2\nDB_USER=admin\n");
}

#[test]
fn test_get_prefix_save_without_matches_writes_empty_file() {
    let t = Test::with_secrets(&[("solo", "value")]);
    fs::write(t.path(".env"), "STALE=1\n").unwrap();

    let output = t.get_prefix_save("AI");
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets with prefix 'AI'");
    assert_stdout_contains(&output, "wrote 0 secrets");
    assert_eq!(t.read(".env"), "");
}

#[test]
fn test_get_prefix_save_writes_values_verbatim() {
    let t = Test::with_secrets(&[("APP-greeting", "hello world # not a comment")]);

    assert_success(&t.get_prefix_save("APP"));
    assert_eq!(t.read(".env"), "APP_GREETING=hello world # not a comment\n");
}

#[test]
fn test_get_prefix_save_into_missing_directory_fails() {
    let t = Test::with_secrets(PREFIXED_SECRETS);

    let output = t.run(&["get-prefix-save", "AI", "-o", "missing/dir/.env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "io error");
}

#[test]
fn test_get_prefix_save_keeps_config_env_file() {
    let t = Test::with_secrets(PREFIXED_SECRETS);
    let config = format!("AZURE_KEYVAULT_URL={}\n", t.vault_url());
    fs::write(t.path(".env"), &config).unwrap();

    let output = t.bare_cmd().args(["get-prefix-save", "AI"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "refusing to overwrite .env");
    assert_stderr_contains(&output, "--output");
    assert_eq!(t.read(".env"), config);

    let output = t.bare_cmd().arg("list").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "AI-api-key");
}

#[test]
fn test_get_prefix_save_config_env_file_with_output_elsewhere() {
    let t = Test::with_secrets(PREFIXED_SECRETS);
    fs::write(t.path(".env"), format!("export AZURE_KEYVAULT_URL={}\n", t.vault_url())).unwrap();

    let output = t
        .bare_cmd()
        .args(["get-prefix-save", "AI", "-o", "ai.env"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("ai.env"), "AI_API_KEY=sk-test-12345\nAI_MODEL=gpt-4o\n");

    assert_success(&t.bare_cmd().arg("list").output().unwrap());
}

#[test]
fn test_get_prefix_save_force_replaces_config_env_file() {
    let t = Test::with_secrets(PREFIXED_SECRETS);
    fs::write(t.path(".env"), format!("AZURE_KEYVAULT_URL={}\n", t.vault_url())).unwrap();

    let output = t.run(&["get-prefix-save", "DB", "--force"]);
    assert_success(&output);
    assert_eq!(t.read(".env"), "DB_PASSWORD=hunter2\nDB_USER=admin\n");
}
