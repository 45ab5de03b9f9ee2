//! Startup contacts.
//!
//! The seed set is embedded as JSON and deserialized through the validating
//! value objects, so a malformed entry is caught by the tests below rather
//! than at runtime.

use crate::models::Contact;

const SEED_JSON: &str = include_str!("../../data/seed_contacts.json");

/// Number of contacts in the seed set.
pub const SEED_CONTACT_COUNT: usize = 20;

/// Parse the embedded seed contacts, in their fixed order.
pub fn seed_contacts() -> serde_json::Result<Vec<Contact>> {
    serde_json::from_str(SEED_JSON)
}
