//! Skip macros for tests that need a live vault.

/// Skip a test if no live Key Vault is configured.
#[macro_export]
macro_rules! skip_without_vault {
    () => {
        if std::env::var("KVENV_TEST_VAULT_URL").is_err() {
            eprintln!("SKIPPED: KVENV_TEST_VAULT_URL not set (set to https://<name>.vault.azure.net/)");
            return;
        }
    };
}
