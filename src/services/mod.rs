//! Application service layer.
//!
//! Services hold the business rules that sit between the menu and the
//! in-memory store. They never touch the backing file.

mod clock;
mod contact_service;

pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use contact_service::{
    is_confirmation, ContactService, ContactUpdate, DeleteOutcome, NewContact,
};
