//! Project payload validation.

use crate::error::CoreError;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Validate a create/update payload, collecting every rule violation so
/// the dashboard can show all field errors at once.
pub fn validate_payload(title: &str, description: &str) -> Result<(), CoreError> {
    let mut errors = Vec::new();

    let title_len = title.chars().count();
    if title.is_empty() || title_len < TITLE_MIN_CHARS || title_len > TITLE_MAX_CHARS {
        errors.push("Title must be a string between 3 and 100 characters.".to_string());
    }

    let description_len = description.chars().count();
    if description.is_empty()
        || description_len < DESCRIPTION_MIN_CHARS
        || description_len > DESCRIPTION_MAX_CHARS
    {
        errors.push("Description must be a string between 10 and 500 characters.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation {
            message: "Payload validation failed".to_string(),
            details: errors,
        })
    }
}
