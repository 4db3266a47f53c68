//! Configuration and error reporting tests.

use crate::support::*;
use std::fs;

#[test]
fn test_missing_vault_url_fails_with_hint() {
    let t = Test::new();

    let output = t.bare_cmd().arg("list").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "AZURE_KEYVAULT_URL not found");
    assert_stderr_contains(&output, "--vault-url");
}

#[test]
fn test_vault_url_read_from_dotenv() {
    let t = Test::with_secrets(&[("AI-key", "from-dotenv-vault")]);
    fs::write(
        t.path(".env"),
        format!("# local settings\nAZURE_KEYVAULT_URL={}\n", t.vault_url()),
    )
    .unwrap();

    let output = t.bare_cmd().args(["get", "AI-key"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "from-dotenv-vault");
}

#[test]
fn test_process_env_wins_over_dotenv() {
    let t = Test::with_secrets(&[("AI-key", "from-env")]);
    fs::write(
        t.path(".env"),
        "AZURE_KEYVAULT_URL=file:///definitely/not/here.json\n",
    )
    .unwrap();

    let output = t.get("AI-key");
    assert_success(&output);
    assert_stdout_contains(&output, "from-env");
}

#[test]
fn test_vault_url_flag_wins_over_env() {
    let t = Test::with_secrets(&[("AI-key", "from-flag")]);
    let url = t.vault_url();

    let output = t
        .bare_cmd()
        .env("AZURE_KEYVAULT_URL", "file:///definitely/not/here.json")
        .args(["--vault-url", &url, "get", "AI-key"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "from-flag");
}

#[test]
fn test_invalid_vault_url_rejected() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .env("AZURE_KEYVAULT_URL", "ftp://vault.example.com/")
        .arg("list")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid vault url");
}

#[cfg(not(feature = "azure"))]
#[test]
fn test_https_vault_needs_azure_feature() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .env("AZURE_KEYVAULT_URL", "https://demo.vault.azure.net/")
        .arg("list")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--features azure");
}

#[test]
fn test_disable_ssl_verify_accepted_for_file_vault() {
    let t = Test::with_secrets(&[("AI-key", "v")]);

    let output = t
        .cmd()
        .env("DISABLE_SSL_VERIFY", "true")
        .args(["--disable-ssl-verify", "list"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_malformed_vault_file_reported() {
    let t = Test::new();
    fs::write(t.vault_path(), "{ not json").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed vault file");
}

#[test]
fn test_completions_need_no_vault() {
    let t = Test::new();

    let output = t.bare_cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "kvenv");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.run(&["frobnicate"]);
    assert_failure(&output);
}
