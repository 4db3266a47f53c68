//! Vault configuration.
//!
//! A [`Config`] is resolved once per invocation and passed explicitly to
//! whatever needs it. Sources, highest priority first:
//!
//! 1. command-line flags
//! 2. process environment
//! 3. `.env` in the current directory
//!
//! The `.env` file never overrides a variable that is already set in the
//! process environment.

use std::path::Path;

use tracing::{debug, warn};
use url::Url;

use crate::core::constants::{AZURE_VAULT_DOMAIN, DISABLE_SSL_VERIFY_VAR, ENV_FILE, VAULT_URL_VAR};
use crate::core::env::EnvFile;
use crate::error::{ConfigError, Result};

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Vault URL, takes precedence over the environment
    pub vault_url: Option<String>,
    /// Disable TLS certificate verification
    pub disable_ssl_verify: bool,
}

/// Resolved vault configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    vault_url: Url,
    disable_ssl_verify: bool,
}

impl Config {
    /// Build a configuration directly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidVaultUrl` if the URL does not parse or
    /// uses an unsupported scheme.
    pub fn new(vault_url: &str, disable_ssl_verify: bool) -> Result<Self> {
        Ok(Self {
            vault_url: parse_vault_url(vault_url)?,
            disable_ssl_verify,
        })
    }

    /// Resolve from flags, the process environment and `./.env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVaultUrl` when no source provides a
    /// vault URL, or `ConfigError::InvalidVaultUrl` when it is malformed.
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(overrides, Path::new(ENV_FILE))
    }

    /// Like [`Config::load`] with an explicit `.env` path.
    ///
    /// A missing or unreadable env file is ignored.
    pub fn load_from(overrides: Overrides, env_file: &Path) -> Result<Self> {
        let dotenv = match EnvFile::load(env_file) {
            Ok(env) => {
                debug!(path = %env_file.display(), entries = env.len(), "loaded env file");
                Some(env)
            }
            Err(_) => None,
        };

        Self::resolve(overrides, |var| {
            std::env::var(var).ok().or_else(|| {
                dotenv
                    .as_ref()
                    .and_then(|env| env.get(var))
                    .map(str::to_string)
            })
        })
    }

    /// Resolve using `lookup` for environment variables.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn resolve(overrides: Overrides, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = overrides
            .vault_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| lookup(VAULT_URL_VAR).filter(|url| !url.trim().is_empty()))
            .ok_or(ConfigError::MissingVaultUrl)?;

        let disable_ssl_verify = overrides.disable_ssl_verify
            || lookup(DISABLE_SSL_VERIFY_VAR)
                .map(|value| parse_flag(&value))
                .unwrap_or(false);

        let config = Self::new(raw_url.trim(), disable_ssl_verify)?;
        debug!(url = %config.vault_url, disable_ssl_verify, "resolved configuration");
        Ok(config)
    }

    /// Vault endpoint. HTTPS URLs always end with `/`.
    pub fn vault_url(&self) -> &Url {
        &self.vault_url
    }

    /// Whether TLS verification was explicitly disabled.
    pub fn disable_ssl_verify(&self) -> bool {
        self.disable_ssl_verify
    }

    /// Whether the vault looks like a private endpoint rather than public
    /// Azure.
    pub fn is_internal(&self) -> bool {
        self.vault_url.host_str().map(is_internal_host).unwrap_or(false)
    }

    /// Whether TLS certificates should be verified.
    ///
    /// Verification is off when explicitly disabled or when the vault is
    /// internal. Both cases log a warning.
    pub fn verify_tls(&self) -> bool {
        if self.disable_ssl_verify {
            warn!("SSL verification is disabled. This should only be used for testing.");
            return false;
        }

        if self.is_internal() {
            warn!(
                host = self.vault_url.host_str().unwrap_or_default(),
                "internal Key Vault detected, SSL verification disabled"
            );
            return false;
        }

        true
    }
}

/// `true` for private addresses, localhost, and hosts outside `.azure.net`.
pub fn is_internal_host(host: &str) -> bool {
    host.starts_with("10.")
        || host.starts_with("192.168.")
        || host.starts_with("172.")
        || host == "localhost"
        || host == "127.0.0.1"
        || !host.ends_with(AZURE_VAULT_DOMAIN)
}

fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_vault_url(raw: &str) -> Result<Url> {
    let invalid = |reason: String| ConfigError::InvalidVaultUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" => return Err(invalid("bearer tokens require https".to_string()).into()),
        "https" => {
            if url.host_str().is_none() {
                return Err(invalid("missing host".to_string()).into());
            }
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
        }
        "file" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other)).into()),
    }

    Ok(url)
}
