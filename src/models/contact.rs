//! Contact model representing one entry in the contact book.

use crate::domain::{Birthdate, EmailAddress, MobileNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the book.
///
/// Free-text fields are stored as given; mobile, email and birthdate are
/// value objects and therefore always valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Company/organization
    pub company: String,

    /// Mobile number
    pub mobile: MobileNumber,

    /// Email address
    pub email: EmailAddress,

    /// Date of birth
    pub birthdate: Birthdate,
}

impl Contact {
    /// Create a new contact from already validated parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        company: impl Into<String>,
        mobile: MobileNumber,
        email: EmailAddress,
        birthdate: Birthdate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: company.into(),
            mobile,
            email,
            birthdate,
        }
    }

    /// Multi-line rendering of every field.
    pub fn full_details(&self) -> String {
        format!(
            "First Name : {}\n\
             Last Name  : {}\n\
             Company    : {}\n\
             Mobile     : {}\n\
             Email      : {}\n\
             Birthdate  : {}\n",
            self.first_name, self.last_name, self.company, self.mobile, self.email, self.birthdate
        )
    }
}

/// Short rendering: `first last (mobile)`.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.mobile)
    }
}

/// Unvalidated contact fields as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub mobile: String,
    pub email: String,
    pub birthdate: String,
}

impl TryFrom<ContactDraft> for Contact {
    type Error = ValidationError;

    /// Validates mobile, then email, then birthdate, failing on the first
    /// invalid field.
    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let mobile = MobileNumber::new(draft.mobile)?;
        let email = EmailAddress::new(draft.email)?;
        let birthdate = Birthdate::parse(&draft.birthdate)?;

        Ok(Contact::new(
            draft.first_name,
            draft.last_name,
            draft.company,
            mobile,
            email,
            birthdate,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact::new(
            "Emily",
            "Blackwell",
            "Dublin Business School",
            MobileNumber::new("087111111").unwrap(),
            EmailAddress::new("emily.blackwell@dbs.ie").unwrap(),
            Birthdate::from_ymd(1990, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_contact_short_rendering() {
        assert_eq!(sample().to_string(), "Emily Blackwell (087111111)");
    }

    #[test]
    fn test_contact_full_details() {
        let expected = "First Name : Emily\n\
                        Last Name  : Blackwell\n\
                        Company    : Dublin Business School\n\
                        Mobile     : 087111111\n\
                        Email      : emily.blackwell@dbs.ie\n\
                        Birthdate  : 01 Jan 1990\n";
        assert_eq!(sample().full_details(), expected);
    }

    #[test]
    fn test_draft_into_contact() {
        let draft = ContactDraft {
            first_name: "Emily".to_string(),
            last_name: "Blackwell".to_string(),
            company: "Dublin Business School".to_string(),
            mobile: "087111111".to_string(),
            email: "emily.blackwell@dbs.ie".to_string(),
            birthdate: "1 Jan 1990".to_string(),
        };
        assert_eq!(Contact::try_from(draft).unwrap(), sample());
    }

    #[test]
    fn test_draft_reports_invalid_field() {
        let draft = ContactDraft {
            mobile: "087111111".to_string(),
            email: "not-an-email".to_string(),
            birthdate: "1990-01-01".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Contact::try_from(draft),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_draft_accepts_empty_free_text() {
        let draft = ContactDraft {
            mobile: "087111111".to_string(),
            email: "a@b.ie".to_string(),
            birthdate: "1990-01-01".to_string(),
            ..Default::default()
        };
        let contact = Contact::try_from(draft).unwrap();
        assert_eq!(contact.first_name, "");
        assert_eq!(contact.company, "");
    }

    #[test]
    fn test_contact_serialization_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"mobile\":\"087111111\""));
        assert!(json.contains("\"birthdate\":\"1990-01-01\""));

        let parsed: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_contact_deserialization_rejects_invalid_mobile() {
        let json = r#"{"first_name":"A","last_name":"B","company":"C","mobile":"000000000","email":"a@b.ie","birthdate":"1990-01-01"}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
