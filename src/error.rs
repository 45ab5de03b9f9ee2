//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact store operations.
///
/// None of these are fatal; the shell turns each one into a retry prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Index text is not an integer
    #[error("Please enter a valid number, got: '{0}'")]
    InvalidFormat(String),

    /// Index outside [1, count]
    #[error("Number out of range: {index} (valid range is 1 to {count})")]
    OutOfRange { index: i64, count: usize },

    /// A mobile number, email or date failed validation
    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
