//! Command-line interface.

pub mod connection;
pub mod output;
pub mod prefix;
pub mod secrets;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::config::{Config, Overrides};
use crate::core::constants::ENV_FILE;
use crate::core::store;
use crate::error::Result;

/// kvenv - Pull Azure Key Vault secrets into your shell and .env files.
#[derive(Parser)]
#[command(
    name = "kvenv",
    about = "Fetch Azure Key Vault secrets, group them by prefix and write .env files",
    version,
    after_help = "Environment variables:\n  AZURE_KEYVAULT_URL        Vault endpoint (also read from ./.env)\n  DISABLE_SSL_VERIFY=true   Disable SSL verification (testing only)\n  KVENV_LOG                 Log filter, e.g. kvenv=debug"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Vault URL (overrides AZURE_KEYVAULT_URL)
    #[arg(long, global = true)]
    pub vault_url: Option<String>,

    /// Disable TLS certificate verification (testing only)
    #[arg(long, global = true)]
    pub disable_ssl_verify: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration values given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            vault_url: self.vault_url.clone(),
            disable_ssl_verify: self.disable_ssl_verify,
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Test the connection to the vault
    Test,

    /// List all secret names
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a secret value
    Get {
        /// Secret name
        name: String,
    },

    /// Get several secrets at once
    GetMultiple {
        /// Secret names
        #[arg(required = true)]
        names: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get every secret whose name starts with `<prefix>-`
    GetPrefix {
        /// Prefix before the first hyphen (case-sensitive)
        prefix: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save every secret with a prefix to a .env file
    GetPrefixSave {
        /// Prefix before the first hyphen (case-sensitive)
        prefix: String,
        /// File to write (overwritten)
        #[arg(short, long, default_value = ENV_FILE)]
        output: PathBuf,
        /// Overwrite the file even if it sets AZURE_KEYVAULT_URL
        #[arg(long)]
        force: bool,
    },

    /// Set a secret value
    Set {
        /// Secret name (letters, digits, and hyphens)
        name: String,
        /// Secret value
        value: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Execute a command.
///
/// Resolves the configuration and opens the store once, then hands the
/// store to the command.
pub fn execute(command: Command, overrides: Overrides) -> Result<()> {
    use Command::*;

    if let Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "kvenv", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load(overrides)?;
    let store = store::open(&config)?;
    let store = store.as_ref();

    match command {
        Test => connection::test(store),
        List { json } => secrets::list(store, json),
        Get { name } => secrets::get(store, &name),
        GetMultiple { names, json } => secrets::get_multiple(store, &names, json),
        GetPrefix { prefix, json } => prefix::show(store, &prefix, json),
        GetPrefixSave {
            prefix,
            output,
            force,
        } => prefix::save(store, &prefix, &output, force),
        Set { name, value } => secrets::set(store, &name, &value),
        Completions { .. } => Ok(()),
    }
}
