//! Contact service layer.
//!
//! Business rules for adding, searching, updating and deleting contacts.
//! Every operation takes the store explicitly and either applies its whole
//! mutation or leaves the store untouched.

use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactStore, DEFAULT_GROUP};
use crate::services::clock::{Clock, SystemClock};
use tracing::debug;

/// Raw input for a new contact, as typed at the prompts.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub group: String,
}

/// Raw input for an update. A blank field keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub group: String,
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The contact was removed; the record is handed back.
    Deleted(Contact),

    /// The user declined the confirmation; nothing changed.
    Cancelled,
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Contact operations over an explicitly passed [`ContactStore`].
pub struct ContactService {
    clock: Box<dyn Clock>,
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactService {
    /// Create a service stamping records with the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a service with a custom timestamp source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Check that `raw` names a contact that could be added to `store`.
    pub fn check_new_name(&self, store: &ContactStore, raw: &str) -> ContactResult<ContactName> {
        let name = ContactName::new(raw)?;
        if store.contains(name.as_str()) {
            debug!(name = %name, "Rejected duplicate contact");
            return Err(ContactError::AlreadyExists(name.into_inner()));
        }
        Ok(name)
    }

    /// Add a new contact.
    ///
    /// Checks run in order: name present, name unused, phone valid, email
    /// valid. The first failure is returned and the store is unchanged.
    pub fn add<'s>(
        &self,
        store: &'s mut ContactStore,
        input: NewContact,
    ) -> ContactResult<(&'s str, &'s Contact)> {
        let name = self.check_new_name(store, &input.name)?;

        let phone = PhoneNumber::new(input.phone.trim())?;
        let email = EmailAddress::parse_optional(&input.email)?;
        let address = non_blank(&input.address).map(str::to_string);
        let group = non_blank(&input.group).unwrap_or(DEFAULT_GROUP).to_string();

        let mut contact = Contact::new(phone, self.clock.now());
        contact.email = email;
        contact.address = address;
        contact.group = group;

        debug!(name = %name, group = %contact.group, "Adding contact");
        let key = name.into_inner();
        let duplicate = ContactError::AlreadyExists(key.clone());
        store.insert_new(key, contact).ok_or(duplicate)
    }

    /// Case-insensitive substring search over contact names.
    ///
    /// Returns every match in store order; an empty query matches all.
    pub fn search<'s>(&self, store: &'s ContactStore, query: &str) -> Vec<(&'s str, &'s Contact)> {
        let query = query.to_lowercase();
        let matches: Vec<_> = store
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&query))
            .collect();
        debug!(query = %query, matches = matches.len(), "Searched contacts");
        matches
    }

    /// All contacts in store order.
    pub fn list<'s>(&self, store: &'s ContactStore) -> Vec<(&'s str, &'s Contact)> {
        store.iter().collect()
    }

    /// Merge non-blank fields of `changes` into an existing contact.
    ///
    /// Supplied phone and email are validated before anything is written,
    /// so an invalid value aborts the whole update. `updated_at` is
    /// refreshed on success even when every field was blank. A blank field
    /// cannot be used to clear a stored value.
    pub fn update<'s>(
        &self,
        store: &'s mut ContactStore,
        name: &str,
        changes: ContactUpdate,
    ) -> ContactResult<&'s Contact> {
        let name = name.trim();
        if !store.contains(name) {
            return Err(ContactError::NotFound(name.to_string()));
        }

        let phone = non_blank(&changes.phone).map(PhoneNumber::new).transpose()?;
        let email = EmailAddress::parse_optional(&changes.email)?;
        let address = non_blank(&changes.address).map(str::to_string);
        let group = non_blank(&changes.group).map(str::to_string);
        let now = self.clock.now();

        let contact = store
            .get_mut(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))?;

        if let Some(phone) = phone {
            contact.phone = phone;
        }
        if let Some(email) = email {
            contact.email = Some(email);
        }
        if let Some(address) = address {
            contact.address = Some(address);
        }
        if let Some(group) = group {
            contact.group = group;
        }
        contact.updated_at = now;

        debug!(name = %name, "Updated contact");
        Ok(contact)
    }

    /// Delete a contact once the caller has asked for confirmation.
    ///
    /// An unknown name is an error even when `confirmed` is false.
    pub fn delete(
        &self,
        store: &mut ContactStore,
        name: &str,
        confirmed: bool,
    ) -> ContactResult<DeleteOutcome> {
        let name = name.trim();
        if !store.contains(name) {
            return Err(ContactError::NotFound(name.to_string()));
        }
        if !confirmed {
            debug!(name = %name, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = store
            .remove(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))?;
        debug!(name = %name, "Deleted contact");
        Ok(DeleteOutcome::Deleted(removed))
    }
}

/// Interpret a yes/no answer. Only `y` and `yes` (any case) confirm.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
