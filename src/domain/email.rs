//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Dot-atom local part. Letters and digits may be any Unicode script.
static DOT_ATOM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}\p{M}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}\p{M}!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("Failed to compile dot-atom regex")
});

/// Quoted-string local part: any printable text between double quotes, with
/// backslash escapes.
static QUOTED_LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"(?:[^"\\\r\n]|\\[^\r\n])*"$"#)
        .expect("Failed to compile quoted local part regex")
});

/// A single hostname label: letters and digits of any script, inner hyphens.
static HOSTNAME_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}](?:[\p{L}\p{N}\p{M}-]*[\p{L}\p{N}\p{M}])?$")
        .expect("Failed to compile hostname label regex")
});

/// Longest hostname label, in characters.
const MAX_LABEL_LEN: usize = 63;

/// Tag that marks an IPv6 address inside a domain literal.
const IPV6_TAG: &str = "IPv6:";

/// Longest local part permitted by RFC 5321.
const MAX_LOCAL_PART_LEN: usize = 64;

/// Longest forward-path address permitted by RFC 5321.
const MAX_ADDRESS_LEN: usize = 254;

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time
/// against the `local-part "@" domain` mailbox grammar.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("emily.blackwell@dbs.ie").unwrap();
/// assert_eq!(email.as_str(), "emily.blackwell@dbs.ie");
/// assert!(EmailAddress::new("\"emily blackwell\"@[192.168.0.1]").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - The last '@' splits a non-empty local part from the domain
    /// - Local part is a dot-atom (no leading, trailing or doubled dots) or a
    ///   quoted string such as `"john doe"`
    /// - Domain is one or more dot-separated labels of letters, digits and
    ///   inner hyphens, or an address literal: `[192.168.0.1]`, `[IPv6:::1]`
    /// - Letters may be non-ASCII (`josé@bücher.de`)
    /// - No whitespace outside a quoted local part
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Check a candidate without constructing a value.
    pub fn is_valid(email: &str) -> bool {
        if email.len() > MAX_ADDRESS_LEN {
            return false;
        }

        match email.rsplit_once('@') {
            Some((local, _)) if local.len() > MAX_LOCAL_PART_LEN => false,
            Some((local, domain)) => is_valid_local_part(local) && is_valid_domain(domain),
            None => false,
        }
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_local_part(local: &str) -> bool {
    DOT_ATOM_REGEX.is_match(local) || QUOTED_LOCAL_REGEX.is_match(local)
}

fn is_valid_domain(domain: &str) -> bool {
    match domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        Some(literal) => match literal.strip_prefix(IPV6_TAG) {
            Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
            None => literal.parse::<Ipv4Addr>().is_ok(),
        },
        None => domain.split('.').all(|label| {
            label.chars().count() <= MAX_LABEL_LEN && HOSTNAME_LABEL_REGEX.is_match(label)
        }),
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@exa mple.com").is_err());
        assert!(EmailAddress::new(" user@example.com").is_err());
        assert!(EmailAddress::new("user@example.com ").is_err());
        assert!(EmailAddress::new("user@.example.com").is_err());
        assert!(EmailAddress::new("user@example..com").is_err());
        assert!(EmailAddress::new("user@example.com.").is_err());
        assert!(EmailAddress::new("user@-example.com").is_err());
        assert!(EmailAddress::new("user@example-.com").is_err());
        assert!(EmailAddress::new(".user@example.com").is_err());
        assert!(EmailAddress::new("us..er@example.com").is_err());
        assert!(EmailAddress::new("Display Name <user@example.com>").is_err());

        assert!(EmailAddress::new("valid@example.com").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
        assert!(EmailAddress::new("sarah.obrien@hp.ie").is_ok());
        assert!(EmailAddress::new("o'connor@techworld.ie").is_ok());
        assert!(EmailAddress::new("user@localhost").is_ok());
        assert!(EmailAddress::new("user@my-domain.com").is_ok());
    }

    #[test]
    fn test_email_length_limits() {
        let local = "a".repeat(65);
        assert!(EmailAddress::new(format!("{}@example.com", local)).is_err());

        let local = "a".repeat(64);
        assert!(EmailAddress::new(format!("{}@example.com", local)).is_ok());

        let label = "b".repeat(63);
        let long = format!("user@{}.{}.{}.{}.com", label, label, label, label);
        assert!(long.len() > MAX_ADDRESS_LEN);
        assert!(EmailAddress::new(long).is_err());

        let label = "c".repeat(64);
        assert!(EmailAddress::new(format!("user@{}.com", label)).is_err());
    }

    #[test]
    fn test_email_quoted_local_part() {
        assert!(EmailAddress::new("\"john doe\"@example.com").is_ok());
        assert!(EmailAddress::new("\"john@home\"@example.com").is_ok());
        assert!(EmailAddress::new(r#""say \"hi\""@example.com"#).is_ok());

        assert!(EmailAddress::new("\"unterminated@example.com").is_err());
        assert!(EmailAddress::new("john \"doe\"@example.com").is_err());
        assert!(EmailAddress::new("\"a\"\"b\"@example.com").is_err());
    }

    #[test]
    fn test_email_address_literal_domain() {
        assert!(EmailAddress::new("user@[192.168.0.1]").is_ok());
        assert!(EmailAddress::new("user@[IPv6:2001:db8::1]").is_ok());

        assert!(EmailAddress::new("user@[300.168.0.1]").is_err());
        assert!(EmailAddress::new("user@[2001:db8::1]").is_err());
        assert!(EmailAddress::new("user@[example.com]").is_err());
        assert!(EmailAddress::new("user@192.168.0.1]").is_err());
    }

    #[test]
    fn test_email_non_ascii() {
        assert!(EmailAddress::new("josé@example.com").is_ok());
        assert!(EmailAddress::new("user@bücher.de").is_ok());
        assert!(EmailAddress::new("用户@例子.广告").is_ok());

        assert!(EmailAddress::new("jos\u{a0}@example.com").is_err());
        assert!(EmailAddress::new("josé@bü cher.de").is_err());
    }

    #[test]
    fn test_email_display() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(format!("{}", email), "user@example.com");
    }

    #[test]
    fn test_email_serialization() {
        let email = EmailAddress::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }

    #[test]
    fn test_email_deserialization_invalid_fails() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
