// ============================
// crates/page-lib/src/validation.rs
// ============================
//! Form field validation rules.

use ecotrack_common::{MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT_MESSAGE};
use thiserror::Error;

/// Possible validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", PASSWORD_TOO_SHORT_MESSAGE)]
    PasswordTooShort { length: usize },
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Length of `value` as the browser reports it (UTF-16 code units)
pub fn field_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate the length of a password. No other rule is applied.
pub fn validate_password_length(password: &str) -> ValidationResult<()> {
    let length = field_length(password);
    if length < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort { length });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password_length("abcdefgh").is_ok());
        assert!(validate_password_length("a much longer passphrase").is_ok());

        assert_eq!(
            validate_password_length("abc"),
            Err(ValidationError::PasswordTooShort { length: 3 })
        );
        assert!(validate_password_length("").is_err());
        assert!(validate_password_length("abcdefg").is_err());
    }

    #[test]
    fn test_error_message_is_exact() {
        let err = validate_password_length("abc").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Four astral-plane characters: 4 chars, 16 bytes, 8 code units
        let emoji = "\u{1F331}\u{1F331}\u{1F331}\u{1F331}";
        assert_eq!(field_length(emoji), 8);
        assert!(validate_password_length(emoji).is_ok());

        // Seven two-byte characters are still seven units
        let accented = "ééééééé";
        assert_eq!(field_length(accented), 7);
        assert!(validate_password_length(accented).is_err());
    }
}
