use crate::models::Contact;

/// Ordered storage for contacts.
///
/// Positions are 0-based offsets. Callers validate bounds before mutating;
/// out-of-range offsets return `None` rather than panicking.
pub trait ContactRepository {
    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Whether the repository holds no contacts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieve the contact at `offset`.
    fn get(&self, offset: usize) -> Option<&Contact>;

    /// Retrieve the contact at `offset` for in-place modification.
    fn get_mut(&mut self, offset: usize) -> Option<&mut Contact>;

    /// Append a contact after the last one.
    fn push(&mut self, contact: Contact);

    /// Remove the contact at `offset`, shifting later contacts down by one.
    fn remove(&mut self, offset: usize) -> Option<Contact>;

    /// Iterate contacts in insertion order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Contact> + '_>;
}
