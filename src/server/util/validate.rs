use crate::server::error::AppError;

const MAX_CODE_LEN: usize = 32;

/// Validates a business code.
///
/// Codes are non-blank, at most 32 characters, and limited to ASCII letters,
/// digits, `_` and `-`.
///
/// # Arguments
/// - `field` - Name of the field, used in the error message
/// - `code` - Value to validate
///
/// # Returns
/// - `Ok(&str)` - The code, unchanged
/// - `Err(AppError::BadRequest)` - The code is malformed
pub fn validate_code<'a>(field: &str, code: &'a str) -> Result<&'a str, AppError> {
    if code.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }

    if code.len() > MAX_CODE_LEN {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, MAX_CODE_LEN
        )));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::BadRequest(format!(
            "{} may only contain letters, digits, '_' and '-'",
            field
        )));
    }

    Ok(code)
}

/// Validates that a free-text value is not blank.
pub fn validate_not_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }

    Ok(value)
}
