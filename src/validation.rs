//! Input validation for directory records.

use crate::error::{RelayError, Result};

/// Maximum allowed length for a business or person name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a business id.
pub const MAX_ID_LENGTH: usize = 64;

/// Validates a display name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RelayError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(RelayError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a business id. Empty ids could never be encoded into a global ID.
pub fn validate_business_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(RelayError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(RelayError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.chars().any(char::is_control) {
        return Err(RelayError::Validation(
            "ID cannot contain control characters".to_string(),
        ));
    }
    Ok(())
}
