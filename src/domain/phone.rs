//! PhoneNumber value object.

use super::errors::{ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of digits in a stored phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Maximum number of digits in a stored phone number.
pub const MAX_PHONE_DIGITS: usize = 15;

// `\D` is Unicode-aware: any decimal digit (category Nd) survives the strip.
static NON_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D").expect("Failed to compile non-digit regex"));

/// Strip every non-digit character from `raw` and check the digit count.
///
/// Returns the bare digit string when it has between 10 and 15 digits
/// inclusive. Any Unicode decimal digit counts, so full-width and
/// Arabic-Indic numerals are kept as typed. No locale-specific formatting
/// is applied, so `"+1 (555) 123-4567"` and `"15551234567"` clean to the
/// same value.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` carrying the raw input when the
/// digit count is out of range.
pub fn clean_phone(raw: &str) -> ValidationResult<String> {
    let digits = NON_DIGIT.replace_all(raw, "").into_owned();

    if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.chars().count()) {
        Ok(digits)
    } else {
        Err(ValidationError::InvalidPhone(raw.to_string()))
    }
}

/// A phone number normalized to its digits.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("555-123-4567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, normalizing through [`clean_phone`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input does not clean
    /// to 10-15 digits.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        clean_phone(phone.as_ref()).map(Self)
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Stored as the bare digit string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_phone_strips_formatting() {
        assert_eq!(clean_phone("555-123-4567").unwrap(), "5551234567");
        assert_eq!(clean_phone("+1 (555) 123-4567").unwrap(), "15551234567");
        assert_eq!(clean_phone("555.123.4567").unwrap(), "5551234567");
    }

    #[test]
    fn test_clean_phone_length_bounds() {
        assert!(clean_phone("123456789").is_err());
        assert!(clean_phone("1234567890").is_ok());
        assert!(clean_phone("123456789012345").is_ok());
        assert!(clean_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_clean_phone_rejects_no_digits() {
        assert_eq!(
            clean_phone("call me"),
            Err(ValidationError::InvalidPhone("call me".to_string()))
        );
        assert!(clean_phone("").is_err());
    }

    #[test]
    fn test_clean_phone_is_idempotent() {
        for raw in ["(020) 7946-0958", "+44 20 7946 0958", "1-800-555-0199 ext 12"] {
            let once = clean_phone(raw).unwrap();
            let twice = clean_phone(&once).unwrap();
            assert_eq!(once, twice, "cleaning {raw:?} twice should be stable");
        }
    }

    #[test]
    fn test_clean_phone_accepts_unicode_digits() {
        assert_eq!(clean_phone("١٢٣-٤٥٦-٧٨٩٠").unwrap(), "١٢٣٤٥٦٧٨٩٠");
        assert_eq!(clean_phone("(５５５) １２３-４５６７").unwrap(), "５５５１２３４５６７");
    }

    #[test]
    fn test_clean_phone_counts_characters_not_bytes() {
        // ten full-width digits are 30 bytes of UTF-8
        let fullwidth = "５５５１２３４５６７";
        assert_eq!(fullwidth.len(), 30);
        assert!(clean_phone(fullwidth).is_ok());
        assert!(clean_phone("５５５１２３４５６").is_err());
        assert!(clean_phone("５５５１２３４５６７８９０１２３４").is_err());
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("+1-555-123-4567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"15551234567\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
