//! Data models for the contact book.
//!
//! This module contains the contact record, the raw input shapes used to
//! create and update it, and the embedded seed set.

pub mod contact;
pub mod seed;
pub mod update;

pub use contact::{Contact, ContactDraft};
pub use seed::{seed_contacts, SEED_CONTACT_COUNT};
pub use update::{ContactField, ContactUpdate, UpdateReport, UpdateWarning};
