use crate::server::error::validation::ValidationError;

/// Minimum length, in characters, of question and answer text.
pub const MIN_TEXT_LEN: usize = 3;
/// Maximum length, in characters, of question and answer text.
pub const MAX_TEXT_LEN: usize = 500;

/// Validates the length of a question or answer text field.
///
/// Length is counted in Unicode scalar values rather than bytes, so multi-byte
/// characters count once.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - The text to validate
///
/// # Returns
/// - `Ok(())` - Text is between `MIN_TEXT_LEN` and `MAX_TEXT_LEN` characters inclusive
/// - `Err(ValidationError)` - Text is too short or too long
pub fn validate_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let actual = value.chars().count();

    if actual < MIN_TEXT_LEN {
        return Err(ValidationError::TooShort {
            field,
            min: MIN_TEXT_LEN,
            actual,
        });
    }

    if actual > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
            actual,
        });
    }

    Ok(())
}
