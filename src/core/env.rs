//! Env-file serialization.
//!
//! Turns a [`SecretCollection`] into `KEY=value` lines and back.
//!
//! Secret names become environment keys by replacing every `-` with `_`
//! and upper-casing the result, so `AI-api-key` is written as `AI_API_KEY`.
//! Values are written verbatim: no quoting and no escaping. A value that
//! contains a newline therefore spans several lines in the output file.

use std::collections::BTreeMap;
#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::constants::PREFIX_SEPARATOR;
use crate::core::types::{EnvKey, SecretCollection, SecretName, SecretValue};
use crate::error::Result;

/// Derive the environment variable name for a secret.
///
/// Total and deterministic. Applying it twice gives the same result as
/// applying it once.
pub fn env_key(name: &str) -> EnvKey {
    name.replace(PREFIX_SEPARATOR, "_").to_uppercase()
}

/// An env file held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(EnvKey, SecretValue)>,
}

impl EnvFile {
    /// Build from resolved secrets.
    ///
    /// Missing secrets (`None`) are skipped. Entries are ordered by env
    /// key. When two secret names map to the same key, the one that sorts
    /// later by secret name wins and a warning is logged.
    pub fn from_collection(collection: &SecretCollection) -> Self {
        let mut by_key: BTreeMap<EnvKey, (&SecretName, &SecretValue)> = BTreeMap::new();

        for (name, value) in collection {
            let Some(value) = value else {
                debug!(secret = %name, "skipping missing secret");
                continue;
            };

            let key = env_key(name);
            if let Some((previous, _)) = by_key.insert(key.clone(), (name, value)) {
                warn!(
                    key = %key,
                    previous = %previous,
                    secret = %name,
                    "env key collision, keeping the later secret"
                );
            }
        }

        Self {
            entries: by_key
                .into_iter()
                .map(|(key, (_, value))| (key, value.clone()))
                .collect(),
        }
    }

    /// Create from raw key-value pairs, kept in the given order.
    pub fn from_pairs(pairs: Vec<(EnvKey, SecretValue)>) -> Self {
        Self { entries: pairs }
    }

    /// Parse `KEY=value` text.
    ///
    /// Skips empty lines and comments (lines starting with #). A leading
    /// `export ` is ignored. Matching single or double quotes around a
    /// value are stripped, and double quoted values are unescaped.
    pub fn parse(contents: &str) -> Self {
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let key = key.strip_prefix("export ").map_or(key, str::trim_start);
                entries.push((key.to_string(), parse_env_value(value.trim())));
            }
        }

        Self { entries }
    }

    /// Parse an env file from disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Get a value by key. The last occurrence wins, as in a shell.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as key-value pairs
    pub fn entries(&self) -> &[(EnvKey, SecretValue)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as env-file text, one newline-terminated line per entry.
    pub fn render(&self) -> String {
        let mut output = String::new();

        for (key, value) in &self.entries {
            output.push_str(key);
            output.push('=');
            output.push_str(value);
            output.push('\n');
        }

        output
    }

    /// Write the env file to disk, replacing any existing content.
    ///
    /// On Unix the file is created with mode 0600, and the mode is
    /// re-applied when an existing file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.render();

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;

            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, content)?;
        }

        debug!(path = %path.display(), entries = self.len(), "wrote env file");
        Ok(())
    }
}

impl std::fmt::Display for EnvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Serialize resolved secrets into an env file at `path`.
///
/// Truncates the file if it exists. Returns the number of lines written.
///
/// # Errors
///
/// Returns `Error::Io` if the path cannot be opened for writing.
pub fn write_env_file(collection: &SecretCollection, path: impl AsRef<Path>) -> Result<usize> {
    let env = EnvFile::from_collection(collection);
    env.save(path)?;
    Ok(env.len())
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
