//! In-memory secret store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::SecretStore;
use crate::core::types::{SecretName, SecretValue};
use crate::error::Result;

/// Secrets held in a map for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    secrets: RefCell<BTreeMap<SecretName, SecretValue>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with secrets.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<SecretName>,
        V: Into<SecretValue>,
    {
        Self {
            secrets: RefCell::new(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SecretStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn get_secret(&self, name: &str) -> Result<Option<SecretValue>> {
        Ok(self.secrets.borrow().get(name).cloned())
    }

    fn set_secret(&self, name: &str, value: &str) -> Result<()> {
        self.secrets
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn list_secret_names(&self) -> Result<Vec<SecretName>> {
        Ok(self.secrets.borrow().keys().cloned().collect())
    }
}
