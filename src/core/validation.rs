//! Input validation for kvenv operations.
//!
//! Validates secret names and values before they are sent to a store.

use crate::core::constants::MAX_SECRET_NAME_LEN;
use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// Key Vault secret names:
/// - Only A-Z, a-z, 0-9, and hyphen
/// - 1 to 127 characters
///
/// # Arguments
///
/// * `name` - The secret name to validate
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if name.chars().count() > MAX_SECRET_NAME_LEN {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: format!("longer than {} characters", MAX_SECRET_NAME_LEN),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '-' {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, and hyphen are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a secret value.
///
/// Secret values cannot be empty.
///
/// # Errors
///
/// Returns `ValidationError` if the value is empty.
pub fn validate_value(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }

    Ok(())
}
