//! kvenv - Pull Azure Key Vault secrets into your shell and .env files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kvenv::cli::output;
use kvenv::cli::{execute, Cli};
use kvenv::core::constants::LOG_VAR;
use kvenv::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kvenv=debug")
        } else {
            EnvFilter::new("kvenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let overrides = cli.overrides();
    if let Err(e) = execute(cli.command, overrides) {
        output::error(&e.to_string());
        for hint in hints(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Troubleshooting suggestions for an error.
fn hints(e: &Error) -> &'static [&'static str] {
    match e {
        Error::Config(ConfigError::MissingVaultUrl) => &[
            "set AZURE_KEYVAULT_URL in the environment or in .env",
            "or pass --vault-url https://<name>.vault.azure.net/",
        ],
        Error::Config(ConfigError::ProtectedEnvFile { .. }) => &[
            "pass --output <file> to write the secrets somewhere else",
            "or --force to replace the file anyway",
        ],
        Error::Store(StoreError::Authentication(_)) => &[
            "verify your Azure credentials with 'az login'",
            "or run in Azure with managed identity enabled",
        ],
        Error::Store(StoreError::Connection(_)) => &[
            "for internal Key Vaults, try setting DISABLE_SSL_VERIFY=true",
            "verify your Azure credentials with 'az login'",
            "check if the Key Vault URL is correct",
        ],
        _ => &[],
    }
}
