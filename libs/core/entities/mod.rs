pub mod list;
pub mod store;
pub mod todo;

use crate::error::ValidationError;

/// Trim a user supplied name, rejecting names that are empty once trimmed.
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_owned())
}
