//! MobileNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a mobile number.
pub const MOBILE_DIGITS: usize = 9;

/// A type-safe wrapper for mobile numbers.
///
/// A mobile number is exactly nine ASCII digits and is not all zeros.
/// Input is taken verbatim; surrounding whitespace makes it invalid.
///
/// # Example
///
/// ```
/// use contact_book::domain::MobileNumber;
///
/// let mobile = MobileNumber::new("087111111").unwrap();
/// assert_eq!(mobile.as_str(), "087111111");
/// assert!(MobileNumber::new("000000000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Create a new MobileNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly nine characters
    /// - Every character is an ASCII digit
    /// - Not `000000000`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidMobile` if the number is invalid.
    pub fn new(mobile: impl Into<String>) -> Result<Self, ValidationError> {
        let mobile = mobile.into();

        if !Self::is_valid(&mobile) {
            return Err(ValidationError::InvalidMobile(mobile));
        }

        Ok(Self(mobile))
    }

    /// Check a candidate without constructing a value.
    pub fn is_valid(mobile: &str) -> bool {
        // Byte length equals char count once every byte is an ASCII digit
        mobile.len() == MOBILE_DIGITS
            && mobile.bytes().all(|b| b.is_ascii_digit())
            && mobile.bytes().any(|b| b != b'0')
    }

    /// Get the mobile number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for MobileNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MobileNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MobileNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
