//! Connection test command.

use crate::cli::output;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Check that the vault can be listed and report how many secrets it holds.
pub fn test(store: &dyn SecretStore) -> Result<()> {
    output::progress("Testing connection");

    match store.test_connection() {
        Ok(count) => {
            output::progress_done(true);
            output::success(&format!(
                "connection successful, found {} secrets ({} backend)",
                count,
                store.backend()
            ));
            Ok(())
        }
        Err(e) => {
            output::progress_done(false);
            Err(e)
        }
    }
}
