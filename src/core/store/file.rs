//! File-backed secret store.
//!
//! Keeps secrets in a local JSON object of name to value. Useful for
//! offline development and for exercising the CLI without a cloud vault:
//!
//! ```text
//! AZURE_KEYVAULT_URL=file:///home/me/vault.json kvenv get-prefix AI
//! ```

use std::collections::BTreeMap;
#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::SecretStore;
use crate::core::types::{SecretName, SecretValue};
use crate::error::{Result, StoreError};

/// Secrets stored in a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `path`. The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<SecretName, SecretValue>> {
        if !self.path.exists() {
            return Err(StoreError::Connection(format!(
                "vault file not found: {}",
                self.path.display()
            ))
            .into());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            StoreError::Backend(format!("malformed vault file {}: {}", self.path.display(), e))
                .into()
        })
    }

    fn write(&self, secrets: &BTreeMap<SecretName, SecretValue>) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(secrets)?;
        contents.push('\n');

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(contents.as_bytes())?;
            file.flush()?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&self.path, contents)?;
        }

        Ok(())
    }
}

impl SecretStore for FileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    fn get_secret(&self, name: &str) -> Result<Option<SecretValue>> {
        trace!(secret = %name, path = %self.path.display(), "reading secret");
        Ok(self.read()?.remove(name))
    }

    fn set_secret(&self, name: &str, value: &str) -> Result<()> {
        let mut secrets = if self.path.exists() {
            self.read()?
        } else {
            BTreeMap::new()
        };

        secrets.insert(name.to_string(), value.to_string());
        self.write(&secrets)
    }

    fn list_secret_names(&self) -> Result<Vec<SecretName>> {
        Ok(self.read()?.into_keys().collect())
    }
}
