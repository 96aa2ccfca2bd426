//! Contact record as held in the store and written to the backing file.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Deserializer, Serialize};

/// Group assigned when none is supplied.
pub const DEFAULT_GROUP: &str = "Other";

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

/// Custom deserializer that reads `""` the same as `null`.
fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Custom deserializer for an optional email that tolerates blank or
/// padded strings.
fn deserialize_optional_email<'de, D>(deserializer: D) -> Result<Option<EmailAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        Some(email) => EmailAddress::parse_optional(&email).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// One entry in the contact store.
///
/// The contact's name is not part of the record; it is the key the record
/// is stored under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Phone number, 10-15 digits
    pub phone: PhoneNumber,

    /// Email address (always written, `null` when absent)
    #[serde(default, deserialize_with = "deserialize_optional_email")]
    pub email: Option<EmailAddress>,

    /// Postal address, free form
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub address: Option<String>,

    /// Group label such as "Friends", "Work" or "Family"
    #[serde(default = "default_group")]
    pub group: String,

    /// When the contact was created (ISO 8601 timestamp)
    pub created_at: String,

    /// When the contact was last updated (ISO 8601 timestamp)
    pub updated_at: String,
}

impl Contact {
    /// Create a new contact with no optional fields, stamped at `now`.
    pub fn new(phone: PhoneNumber, now: impl Into<String>) -> Self {
        let now = now.into();
        Self {
            phone,
            email: None,
            address: None,
            group: default_group(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Email as a plain string, empty when absent.
    pub fn email_str(&self) -> &str {
        self.email.as_ref().map(EmailAddress::as_str).unwrap_or("")
    }

    /// Address as a plain string, empty when absent.
    pub fn address_str(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}
