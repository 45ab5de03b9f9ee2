use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// Contact repository backed by a `Vec`.
///
/// State lives only as long as the repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactRepository {
    contacts: Vec<Contact>,
}

impl MemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<Vec<Contact>> for MemoryContactRepository {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl ContactRepository for MemoryContactRepository {
    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn get(&self, offset: usize) -> Option<&Contact> {
        self.contacts.get(offset)
    }

    fn get_mut(&mut self, offset: usize) -> Option<&mut Contact> {
        self.contacts.get_mut(offset)
    }

    fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    fn remove(&mut self, offset: usize) -> Option<Contact> {
        if offset < self.contacts.len() {
            Some(self.contacts.remove(offset))
        } else {
            None
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Contact> + '_> {
        Box::new(self.contacts.iter())
    }
}
