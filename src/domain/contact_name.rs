//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The primary key of a contact in the store.
///
/// Surrounding whitespace is trimmed at construction and the result
/// must not be empty.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("  Alice ").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if nothing is left after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
