//! Contact Book - an interactive, in-memory contact book with validated records.
//!
//! Contacts are held in insertion order for the lifetime of the process and
//! addressed by 1-based index in the console session.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (mobile number, email, birthdate)
//! - **models**: The contact record, create/update inputs, and seed data
//! - **repositories**: Ordered contact storage behind a trait
//! - **services**: The contact store and index resolution
//! - **cli**: The interactive menu shell
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use cli::Session;
pub use config::Config;
pub use domain::{Birthdate, EmailAddress, MobileNumber, ValidationError};
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::{Contact, ContactDraft, ContactField, ContactUpdate, UpdateReport, UpdateWarning};
pub use repositories::{ContactRepository, MemoryContactRepository};
pub use services::{Confirmation, ContactStore, Position};
