//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated contact fields:
//! mobile numbers, email addresses, and birthdates. Validation is a pure
//! function of the input and happens at construction time, so an invalid
//! value can never be represented in a `Contact`.

pub mod birthdate;
pub mod email;
pub mod errors;
pub mod mobile;

pub use birthdate::Birthdate;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use mobile::MobileNumber;
