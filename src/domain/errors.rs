//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace.
    EmptyName,

    /// The provided email address does not have a `local@domain.tld` shape.
    InvalidEmail(String),

    /// The provided phone number does not reduce to 10-15 digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::InvalidEmail(email) => write!(f, "Invalid email format: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
