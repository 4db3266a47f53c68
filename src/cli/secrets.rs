//! Secret commands (list, get, get-multiple, set).

use crate::cli::output;
use crate::core::secrets;
use crate::core::store::SecretStore;
use crate::core::types::SecretCollection;
use crate::error::Result;

/// List all secret names.
pub fn list(store: &dyn SecretStore, json: bool) -> Result<()> {
    let names = secrets::list(store)?;

    if json {
        let output = serde_json::json!({
            "secrets": names,
            "count": names.len()
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if names.is_empty() {
        output::dimmed("No secrets found");
    } else {
        output::header("Available secrets:");
        for name in &names {
            output::list_item(name);
        }
    }

    Ok(())
}

/// Get a secret value. A missing secret is reported, not an error.
pub fn get(store: &dyn SecretStore, name: &str) -> Result<()> {
    match secrets::get(store, name)? {
        Some(value) => output::secret(name, &value),
        None => output::warn(&format!("secret '{}' not found", name)),
    }
    Ok(())
}

/// Get several secrets, printed in the order requested.
pub fn get_multiple(store: &dyn SecretStore, names: &[String], json: bool) -> Result<()> {
    let results = secrets::get_multiple(store, names);

    if json {
        return print_json(&results);
    }

    let mut results = results;
    for name in names {
        if let Some(value) = results.remove(name) {
            print_entry(name, value.as_deref());
        }
    }

    Ok(())
}

/// Set a secret value.
pub fn set(store: &dyn SecretStore, name: &str, value: &str) -> Result<()> {
    secrets::set(store, name, value)?;
    output::success(&format!("secret '{}' set", name));
    Ok(())
}

/// Print one lookup result as `name: value` or `name: [NOT FOUND]`.
pub(crate) fn print_entry(name: &str, value: Option<&str>) {
    match value {
        Some(value) => output::secret(name, value),
        None => output::missing(name),
    }
}

/// Print lookup results as `{"secrets": {...}, "count": N}`.
pub(crate) fn print_json(results: &SecretCollection) -> Result<()> {
    let output = serde_json::json!({
        "secrets": results,
        "count": results.len()
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
