//! Type aliases for domain concepts.

use std::collections::BTreeMap;

/// A secret name as stored in the vault (e.g. `AI-api-key`).
///
/// By convention `<PREFIX>-<rest>`, where the prefix is everything before
/// the first hyphen.
pub type SecretName = String;

/// A plaintext secret value. Opaque, no schema.
pub type SecretValue = String;

/// An environment variable name derived from a secret name.
pub type EnvKey = String;

/// Secrets resolved during one invocation.
///
/// `None` marks a secret that was requested but not found (or whose lookup
/// failed). Ordered by name so output is reproducible.
pub type SecretCollection = BTreeMap<SecretName, Option<SecretValue>>;
