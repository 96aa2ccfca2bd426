//! Domain value objects and validation rules.
//!
//! Contact names, phone numbers and email addresses are wrapped in
//! value objects that can only be built from valid input, so a record
//! holding them already satisfies the store invariants.

pub mod contact_name;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use email::{validate_email, EmailAddress};
pub use errors::{ValidationError, ValidationResult};
pub use phone::{clean_phone, PhoneNumber};
