//! Partial updates of a contact.
//!
//! Every field of a [`ContactUpdate`] is raw user text. A blank value keeps the
//! current field; a non-blank value replaces it if it validates. A value that
//! fails validation never aborts the update: the old value is kept and the
//! failure is reported back as an [`UpdateWarning`].

use crate::domain::{Birthdate, EmailAddress, MobileNumber, ValidationError};
use crate::models::Contact;
use std::fmt;

/// The fields of a contact, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Company,
    Mobile,
    Email,
    Birthdate,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Company => "company",
            Self::Mobile => "mobile number",
            Self::Email => "email",
            Self::Birthdate => "birthdate",
        };
        f.write_str(label)
    }
}

/// Raw replacement values; blank means "keep current".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub mobile: String,
    pub email: String,
    pub birthdate: String,
}

impl ContactUpdate {
    /// True when every field is blank.
    pub fn is_blank(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.company,
            &self.mobile,
            &self.email,
            &self.birthdate,
        ]
        .iter()
        .all(|value| is_blank(value))
    }
}

/// A supplied value that was rejected; the old value was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWarning {
    pub field: ContactField,
    pub error: ValidationError,
}

impl fmt::Display for UpdateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Keeping the old {}.", self.error, self.field)
    }
}

/// Outcome of applying a [`ContactUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Fields that received a new value, in field order.
    pub changed: Vec<ContactField>,

    /// Fields whose supplied value was rejected.
    pub warnings: Vec<UpdateWarning>,
}

impl UpdateReport {
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn record<T>(&mut self, field: ContactField, result: Result<T, ValidationError>, slot: &mut T) {
        match result {
            Ok(value) => {
                *slot = value;
                self.changed.push(field);
            }
            Err(error) => self.warnings.push(UpdateWarning { field, error }),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Contact {
    /// Apply a partial update in place.
    ///
    /// Free-text fields are stored exactly as supplied. Mobile and email are
    /// validated verbatim; the birthdate is parsed after trimming.
    pub fn apply_update(&mut self, update: &ContactUpdate) -> UpdateReport {
        let mut report = UpdateReport::default();

        let text_fields = [
            (ContactField::FirstName, &update.first_name, &mut self.first_name),
            (ContactField::LastName, &update.last_name, &mut self.last_name),
            (ContactField::Company, &update.company, &mut self.company),
        ];
        for (field, value, slot) in text_fields {
            if !is_blank(value) {
                *slot = value.clone();
                report.changed.push(field);
            }
        }

        if !is_blank(&update.mobile) {
            report.record(
                ContactField::Mobile,
                MobileNumber::new(update.mobile.as_str()),
                &mut self.mobile,
            );
        }

        if !is_blank(&update.email) {
            report.record(
                ContactField::Email,
                EmailAddress::new(update.email.as_str()),
                &mut self.email,
            );
        }

        if !is_blank(&update.birthdate) {
            report.record(
                ContactField::Birthdate,
                Birthdate::parse(&update.birthdate),
                &mut self.birthdate,
            );
        }

        report
    }
}
