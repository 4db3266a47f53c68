//! Secret store facade.
//!
//! Everything kvenv knows about a vault goes through the [`SecretStore`]
//! trait. Authentication, transport security and retries belong to the
//! implementation; the grouping and env-file logic only sees these four
//! operations.
//!
//! ## Backends
//!
//! - **Azure Key Vault**: Feature-gated (`azure`). Selected for `https://`
//!   vault URLs.
//! - **File**: Always available. A JSON object of name to value, selected
//!   for `file://` vault URLs.
//! - **Memory**: Always available. Never selected from a URL; for library
//!   users and tests.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `hashicorp.rs`)
//! 3. Feature-gate if it pulls in an SDK
//! 4. Route a URL scheme to it in [`open`]

use tracing::debug;

use crate::core::config::Config;
use crate::core::types::{SecretName, SecretValue};
use crate::error::{Result, StoreError};

#[cfg(feature = "azure")]
pub mod azure;
mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Minimal capability a vault must offer.
pub trait SecretStore {
    /// Short backend name for logs and diagnostics.
    fn backend(&self) -> &'static str;

    /// Check that the vault is reachable and readable.
    ///
    /// # Returns
    ///
    /// The number of secrets visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the vault cannot be listed.
    fn test_connection(&self) -> Result<usize> {
        Ok(self.list_secret_names()?.len())
    }

    /// Fetch a secret value.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the secret does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for authentication, connectivity, or backend
    /// failures. Never for a missing secret.
    fn get_secret(&self, name: &str) -> Result<Option<SecretValue>>;

    /// Create or overwrite a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the vault rejects the write.
    fn set_secret(&self, name: &str, value: &str) -> Result<()>;

    /// Names of all secrets in the vault, in backend order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the vault cannot be listed.
    fn list_secret_names(&self) -> Result<Vec<SecretName>>;
}

/// Open the store a configuration points at.
///
/// # Errors
///
/// Returns `StoreError::Unsupported` for an `https` vault when built
/// without the `azure` feature, or the backend's own construction error.
pub fn open(config: &Config) -> Result<Box<dyn SecretStore>> {
    let url = config.vault_url();

    match url.scheme() {
        "file" => {
            let path = url.to_file_path().map_err(|()| {
                StoreError::Unsupported(format!("file url without a local path: {}", url))
            })?;
            debug!(path = %path.display(), "using file backend");
            Ok(Box::new(FileStore::new(path)))
        }
        #[cfg(feature = "azure")]
        "https" => {
            debug!(url = %url, "using Azure Key Vault backend");
            Ok(Box::new(azure::AzureKeyVault::new(config)?))
        }
        #[cfg(not(feature = "azure"))]
        "https" => Err(StoreError::Unsupported(
            "this build has no Azure Key Vault support (rebuild with --features azure)".into(),
        )
        .into()),
        other => Err(StoreError::Unsupported(format!("no backend for scheme '{}'", other)).into()),
    }
}
