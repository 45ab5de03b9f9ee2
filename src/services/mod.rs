//! Application service layer.
//!
//! The contact store holds the session's contacts and owns the translation
//! between user-facing indices and repository offsets.

mod contact_store;
mod position;

pub use contact_store::{Confirmation, ContactStore};
pub use position::Position;
