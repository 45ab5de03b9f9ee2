//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input so callers can echo it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The mobile number is not a non-zero 9-digit number.
    #[error("Invalid mobile number '{0}': it must be a non-zero 9-digit number")]
    InvalidMobile(String),

    /// The email address does not match the mailbox grammar.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The text could not be parsed as a calendar date.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidMobile("12345".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid mobile number '12345': it must be a non-zero 9-digit number"
        );

        let err = ValidationError::InvalidEmail("nobody".to_string());
        assert_eq!(err.to_string(), "Invalid email address: nobody");

        let err = ValidationError::InvalidDate("31 Feb".to_string());
        assert_eq!(err.to_string(), "Invalid date format: 31 Feb");
    }
}
