//! Input validation helpers
//!
//! The lifecycle coordinator validates all required text before any blob or
//! record side effect is attempted, so a validation failure never triggers
//! storage I/O.

use crate::error::AppError;

pub const MAX_TITLE_LENGTH: usize = 256;
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Validate a required text field: present after trimming and within the
/// length cap. `field` names the offending field in the error message.
pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} is required", field)));
    }
    if value.len() > max_len {
        return Err(AppError::InvalidInput(format!(
            "{} exceeds maximum length of {} characters",
            field, max_len
        )));
    }
    Ok(())
}
