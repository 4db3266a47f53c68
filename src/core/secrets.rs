//! Secret operations (get, get-multiple, set, list).
//!
//! Thin layer over [`SecretStore`] that adds validation, ordering, and
//! per-name recovery for batch lookups.

use tracing::{debug, warn};

use crate::core::store::SecretStore;
use crate::core::types::{SecretCollection, SecretName, SecretValue};
use crate::core::validation;
use crate::error::Result;

/// Get a single secret.
///
/// # Returns
///
/// `None` when the secret does not exist.
///
/// # Errors
///
/// Returns `StoreError` if the lookup fails for any other reason.
pub fn get(store: &dyn SecretStore, name: &str) -> Result<Option<SecretValue>> {
    debug!(secret = %name, backend = store.backend(), "get secret");
    store.get_secret(name)
}

/// Get several secrets, one lookup at a time.
///
/// Never fails as a whole: a missing secret, or one whose lookup errors,
/// is recorded as `None` and the remaining names are still fetched.
/// Repeated names are looked up once.
pub fn get_multiple<S: AsRef<str>>(store: &dyn SecretStore, names: &[S]) -> SecretCollection {
    let mut results = SecretCollection::new();

    for name in names.iter().map(|name| name.as_ref()) {
        if results.contains_key(name) {
            continue;
        }

        let value = match get(store, name) {
            Ok(value) => value,
            Err(e) => {
                warn!(secret = %name, error = %e, "failed to retrieve secret");
                None
            }
        };
        results.insert(name.to_string(), value);
    }

    results
}

/// Create or overwrite a secret.
///
/// # Errors
///
/// Returns `ValidationError` for an invalid name or empty value, or
/// `StoreError` if the vault rejects the write.
pub fn set(store: &dyn SecretStore, name: &str, value: &str) -> Result<()> {
    validation::validate_name(name)?;
    validation::validate_value(name, value)?;

    debug!(secret = %name, backend = store.backend(), "set secret");
    store.set_secret(name, value)
}

/// All secret names, sorted.
///
/// # Errors
///
/// Returns `StoreError` if the vault cannot be listed.
pub fn list(store: &dyn SecretStore) -> Result<Vec<SecretName>> {
    let mut names = store.list_secret_names()?;
    names.sort();
    Ok(names)
}
