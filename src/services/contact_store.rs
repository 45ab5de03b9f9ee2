//! Contact store.
//!
//! The ordered collection of contacts for one session, with create, list,
//! detail, update and delete operations addressed by [`Position`].

use crate::error::{StoreError, StoreResult};
use crate::models::{seed_contacts, Contact, ContactDraft, ContactUpdate, UpdateReport};
use crate::repositories::{ContactRepository, MemoryContactRepository};
use crate::services::position::Position;
use std::num::IntErrorKind;
use tracing::{debug, info, warn};

/// A caller's answer to a delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// Interpret a typed answer. Only a lone `y` or `Y` confirms; the answer
    /// is compared as typed, so padding or `yes` declines.
    pub fn from_answer(answer: &str) -> Self {
        if answer.eq_ignore_ascii_case("y") {
            Self::Yes
        } else {
            Self::No
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Ordered, index-addressed contact collection.
#[derive(Debug, Clone, Default)]
pub struct ContactStore<R: ContactRepository = MemoryContactRepository> {
    repo: R,
}

impl ContactStore<MemoryContactRepository> {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store holding the seed contacts.
    pub fn seeded() -> serde_json::Result<Self> {
        let contacts = seed_contacts()?;
        info!(count = contacts.len(), "Loaded seed contacts");
        Ok(Self::with_repository(MemoryContactRepository::from(contacts)))
    }
}

impl<R: ContactRepository> ContactStore<R> {
    /// Create a store over an existing repository.
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Validate a 1-based index against the current count.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OutOfRange` if `index` is outside [1, count].
    pub fn position(&self, index: i64) -> StoreResult<Position> {
        let count = self.len();
        match usize::try_from(index) {
            Ok(i) if (1..=count).contains(&i) => Ok(Position::from_offset(i - 1)),
            _ => Err(StoreError::OutOfRange { index, count }),
        }
    }

    /// Parse user text as a 1-based index and validate it.
    ///
    /// Surrounding whitespace is ignored. Integers too large to represent
    /// are reported as out of range rather than malformed.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidFormat` if the text is not an integer
    /// - `StoreError::OutOfRange` if the integer is outside [1, count]
    pub fn resolve_index(&self, raw: &str) -> StoreResult<Position> {
        let index = match raw.trim().parse::<i64>() {
            Ok(index) => index,
            Err(e) => {
                return Err(match e.kind() {
                    IntErrorKind::PosOverflow => StoreError::OutOfRange {
                        index: i64::MAX,
                        count: self.len(),
                    },
                    IntErrorKind::NegOverflow => StoreError::OutOfRange {
                        index: i64::MIN,
                        count: self.len(),
                    },
                    _ => StoreError::InvalidFormat(raw.to_string()),
                })
            }
        };

        self.position(index)
    }

    /// Retrieve the contact at `position`.
    pub fn get(&self, position: Position) -> StoreResult<&Contact> {
        self.repo
            .get(position.offset())
            .ok_or_else(|| self.out_of_range(position))
    }

    /// Append a validated contact and return its position.
    pub fn add(&mut self, contact: Contact) -> Position {
        info!(contact = %contact, "Adding contact");
        self.repo.push(contact);
        Position::from_offset(self.len() - 1)
    }

    /// Validate raw fields and append the resulting contact.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ValidationFailed` for the first invalid field;
    /// the store is left unchanged.
    pub fn add_draft(&mut self, draft: ContactDraft) -> StoreResult<Position> {
        let contact = Contact::try_from(draft).map_err(|e| {
            debug!(error = %e, "Rejected contact draft");
            StoreError::from(e)
        })?;
        Ok(self.add(contact))
    }

    /// Short renderings of every contact, paired with their 1-based index.
    ///
    /// Returns `None` when the store is empty.
    pub fn list(&self) -> Option<impl Iterator<Item = (usize, String)> + '_> {
        if self.is_empty() {
            debug!("Listing empty store");
            return None;
        }

        Some(
            self.repo
                .iter()
                .enumerate()
                .map(|(offset, contact)| (offset + 1, contact.to_string())),
        )
    }

    /// Full multi-line rendering of the contact at `position`.
    pub fn detail(&self, position: Position) -> StoreResult<String> {
        debug!(index = position.index(), "Showing contact details");
        self.get(position).map(Contact::full_details)
    }

    /// Apply a partial update to the contact at `position`.
    ///
    /// Rejected field values are reported in the returned `UpdateReport` and
    /// never fail the operation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OutOfRange` if `position` is no longer valid.
    pub fn update(&mut self, position: Position, update: &ContactUpdate) -> StoreResult<UpdateReport> {
        let out_of_range = self.out_of_range(position);
        let contact = self.repo.get_mut(position.offset()).ok_or(out_of_range)?;

        let report = contact.apply_update(update);
        for warning in &report.warnings {
            warn!(index = position.index(), field = %warning.field, error = %warning.error, "Kept old value");
        }
        info!(
            index = position.index(),
            changed = report.changed.len(),
            "Updated contact"
        );

        Ok(report)
    }

    /// Remove the contact at `position` if `confirmation` is affirmative.
    ///
    /// Returns the removed contact, or `None` when the caller declined.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OutOfRange` if `position` is no longer valid.
    pub fn delete(
        &mut self,
        position: Position,
        confirmation: Confirmation,
    ) -> StoreResult<Option<Contact>> {
        // Checked even on refusal so a stale position is always reported
        self.get(position)?;

        if !confirmation.is_yes() {
            debug!(index = position.index(), "Delete declined");
            return Ok(None);
        }

        let removed = self
            .repo
            .remove(position.offset())
            .ok_or_else(|| self.out_of_range(position))?;
        info!(index = position.index(), contact = %removed, "Deleted contact");

        Ok(Some(removed))
    }

    fn out_of_range(&self, position: Position) -> StoreError {
        StoreError::OutOfRange {
            index: i64::try_from(position.index()).unwrap_or(i64::MAX),
            count: self.len(),
        }
    }
}
