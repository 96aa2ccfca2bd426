//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w{2,}$").expect("Failed to compile email regex")
});

/// Check an optional email string.
///
/// Email is optional, so an absent or empty value is valid. Anything else
/// must look like `local@domain.tld`: word, dot or hyphen characters on
/// both sides of the `@`, and a final label of at least two word
/// characters. This is a syntactic check only.
///
/// ```
/// use contact_book::domain::validate_email;
///
/// assert!(validate_email(""));
/// assert!(validate_email(None));
/// assert!(validate_email("a@b.co"));
/// assert!(!validate_email("not-an-email"));
/// ```
pub fn validate_email<'a>(raw: impl Into<Option<&'a str>>) -> bool {
    match raw.into() {
        None | Some("") => true,
        Some(email) => EMAIL_REGEX.is_match(email),
    }
}

/// A syntactically valid, non-empty email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the input is empty or
    /// does not match the `local@domain.tld` shape.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if email.is_empty() || !validate_email(email.as_str()) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Parse optional user input: blank means "no email".
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        Self::new(raw).map(Some)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
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
    fn test_validate_email_optional() {
        assert!(validate_email(""));
        assert!(validate_email(None));
    }

    #[test]
    fn test_validate_email_format() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last-name@mail.example.org"));
        assert!(validate_email("user_1@sub-domain.io"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("user@domain"));
        assert!(!validate_email("user@domain.c"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user+tag@example.com"));
        assert!(!validate_email("user name@example.com"));
    }

    #[test]
    fn test_email_rejects_empty() {
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(EmailAddress::parse_optional("   ").unwrap(), None);
        let email = EmailAddress::parse_optional(" a@b.com ").unwrap().unwrap();
        assert_eq!(email.as_str(), "a@b.com");
        assert_eq!(
            EmailAddress::parse_optional("nope"),
            Err(ValidationError::InvalidEmail("nope".to_string()))
        );
    }

    #[test]
    fn test_email_deserialization_invalid_fails() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
