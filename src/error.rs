//! Error types.
//!
//! Errors are grouped by the layer that raises them. A missing secret is
//! not an error anywhere in this crate: lookups return `Ok(None)`.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration problems. Always fatal for the current invocation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("AZURE_KEYVAULT_URL not found in environment variables or .env file")]
    MissingVaultUrl,

    #[error("invalid vault url '{url}': {reason}")]
    InvalidVaultUrl { url: String, reason: String },

    #[error("refusing to overwrite {path}: it sets AZURE_KEYVAULT_URL")]
    ProtectedEnvFile { path: String },
}

/// Failures reported by a secret store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("key vault error: {0}")]
    Backend(String),

    #[error("unsupported vault: {0}")]
    Unsupported(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Rejected user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret value for '{0}' cannot be empty")]
    EmptyValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
