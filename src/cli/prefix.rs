//! Prefix commands (get-prefix, get-prefix-save).

use std::path::Path;

use crate::cli::output;
use crate::cli::secrets::{print_entry, print_json};
use crate::core::constants::VAULT_URL_VAR;
use crate::core::env::{self, EnvFile};
use crate::core::prefix as grouping;
use crate::core::store::SecretStore;
use crate::error::{ConfigError, Result};

/// Print every secret belonging to `prefix`.
pub fn show(store: &dyn SecretStore, prefix: &str, json: bool) -> Result<()> {
    let secrets = grouping::get_prefix(store, prefix)?;

    if json {
        return print_json(&secrets);
    }

    if secrets.is_empty() {
        output::dimmed(&format!("no secrets with prefix '{}'", prefix));
        return Ok(());
    }

    for (name, value) in &secrets {
        print_entry(name, value.as_deref());
    }

    Ok(())
}

/// Write every secret belonging to `prefix` to an env file.
///
/// The file is replaced even when no secret matches. A file that sets the
/// vault URL is left alone unless `force` is given.
pub fn save(store: &dyn SecretStore, prefix: &str, path: &Path, force: bool) -> Result<()> {
    if !force {
        guard_config_file(path)?;
    }

    let secrets = grouping::get_prefix(store, prefix)?;

    for (name, _) in secrets.iter().filter(|(_, value)| value.is_none()) {
        output::warn(&format!("skipped '{}' (not found)", name));
    }

    let written = env::write_env_file(&secrets, path)?;

    if secrets.is_empty() {
        output::warn(&format!("no secrets with prefix '{}'", prefix));
    }
    output::success(&format!(
        "wrote {} secrets to {}",
        written,
        output::path(&path.display().to_string())
    ));

    Ok(())
}

/// Refuse to replace an env file that kvenv reads its configuration from.
fn guard_config_file(path: &Path) -> Result<()> {
    let sets_vault_url = EnvFile::load(path)
        .map(|env| env.get(VAULT_URL_VAR).is_some())
        .unwrap_or(false);

    if sets_vault_url {
        return Err(ConfigError::ProtectedEnvFile {
            path: path.display().to_string(),
        }
        .into());
    }

    Ok(())
}
