//! Constants used throughout kvenv.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable holding the vault URL.
pub const VAULT_URL_VAR: &str = "AZURE_KEYVAULT_URL";

/// Environment variable that disables TLS certificate verification.
pub const DISABLE_SSL_VERIFY_VAR: &str = "DISABLE_SSL_VERIFY";

/// Environment variable holding the log filter.
pub const LOG_VAR: &str = "KVENV_LOG";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Separator between a secret's prefix and the rest of its name.
pub const PREFIX_SEPARATOR: char = '-';

/// Key Vault secret names are limited to 127 characters.
pub const MAX_SECRET_NAME_LEN: usize = 127;

/// Domain suffix of public Azure Key Vault endpoints.
pub const AZURE_VAULT_DOMAIN: &str = ".azure.net";

/// OAuth scope for Key Vault data plane tokens.
pub const KEYVAULT_SCOPE: &str = "https://vault.azure.net/.default";

/// Key Vault REST API version.
pub const KEYVAULT_API_VERSION: &str = "7.4";
