//! Data models for the contact book.
//!
//! A [`Contact`] is one record; a [`ContactStore`] is the ordered
//! name-to-record mapping that lives in memory for the whole run.

pub mod contact;
pub mod store;

pub use contact::{Contact, DEFAULT_GROUP};
pub use store::ContactStore;
