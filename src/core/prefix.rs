//! Prefix grouping.
//!
//! Secrets are grouped by the part of their name before the first hyphen:
//! `AI-api-key` and `AI-model` both belong to prefix `AI`. Matching is
//! exact and case-sensitive, and a name without a hyphen has no prefix.

use tracing::{debug, warn};

use crate::core::constants::PREFIX_SEPARATOR;
use crate::core::store::SecretStore;
use crate::core::types::SecretCollection;
use crate::error::Result;

/// The prefix of a secret name, or `None` if it contains no hyphen.
pub fn secret_prefix(name: &str) -> Option<&str> {
    name.split_once(PREFIX_SEPARATOR).map(|(prefix, _)| prefix)
}

/// Whether `name` belongs to `prefix`.
pub fn has_prefix(name: &str, prefix: &str) -> bool {
    secret_prefix(name) == Some(prefix)
}

/// Names from `all_names` that belong to `prefix`, in input order.
pub fn matching_names<'a, S: AsRef<str>>(all_names: &'a [S], prefix: &str) -> Vec<&'a str> {
    all_names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| has_prefix(name, prefix))
        .collect()
}

/// Fetch every secret in `all_names` that belongs to `prefix`.
///
/// One sequential lookup per matching name. A missing secret is recorded
/// as `None`; any other lookup failure is logged, recorded as `None`, and
/// does not stop the remaining lookups. An empty collection means no name
/// carries the prefix.
pub fn filter_by_prefix<S: AsRef<str>>(
    store: &dyn SecretStore,
    all_names: &[S],
    prefix: &str,
) -> SecretCollection {
    let mut collection = SecretCollection::new();

    for name in matching_names(all_names, prefix) {
        let value = match store.get_secret(name) {
            Ok(value) => value,
            Err(e) => {
                warn!(secret = %name, error = %e, "failed to retrieve secret");
                None
            }
        };
        collection.insert(name.to_string(), value);
    }

    debug!(prefix, matched = collection.len(), "grouped secrets by prefix");
    collection
}

/// List the vault once and fetch every secret belonging to `prefix`.
///
/// # Errors
///
/// Returns `StoreError` if the vault cannot be listed. Individual lookup
/// failures are recovered as in [`filter_by_prefix`].
pub fn get_prefix(store: &dyn SecretStore, prefix: &str) -> Result<SecretCollection> {
    let names = store.list_secret_names()?;
    Ok(filter_by_prefix(store, &names, prefix))
}
