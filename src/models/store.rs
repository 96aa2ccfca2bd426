//! In-memory contact store.

use super::contact::Contact;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// All contacts for one run, keyed by name in insertion order.
///
/// Keys are never empty or padded with whitespace. The store is passed
/// explicitly to every operation; the services layer is the only place
/// that mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndexMap<String, Contact>")]
pub struct ContactStore {
    contacts: IndexMap<String, Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Iterate `(name, contact)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.contacts.iter().map(|(name, contact)| (name.as_str(), contact))
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(String::as_str)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    /// Insert a contact under a name that is not yet present.
    ///
    /// Callers check for duplicates first; an existing entry is never
    /// overwritten and `None` is returned in that case.
    pub(crate) fn insert_new(&mut self, name: String, contact: Contact) -> Option<(&str, &Contact)> {
        if self.contacts.contains_key(&name) {
            return None;
        }
        let (index, _) = self.contacts.insert_full(name, contact);
        self.contacts
            .get_index(index)
            .map(|(name, contact)| (name.as_str(), contact))
    }

    /// Remove a contact, keeping the relative order of the others.
    pub(crate) fn remove(&mut self, name: &str) -> Option<Contact> {
        self.contacts.shift_remove(name)
    }
}

impl Serialize for ContactStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.contacts.serialize(serializer)
    }
}

impl TryFrom<IndexMap<String, Contact>> for ContactStore {
    type Error = String;

    fn try_from(contacts: IndexMap<String, Contact>) -> Result<Self, Self::Error> {
        if let Some(bad) = contacts
            .keys()
            .find(|name| name.is_empty() || name.trim() != name.as_str())
        {
            return Err(format!("invalid contact name key: {:?}", bad));
        }
        Ok(Self { contacts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNumber;

    fn contact(phone: &str) -> Contact {
        Contact::new(PhoneNumber::new(phone).unwrap(), "2024-01-01T00:00:00.000000")
    }

    #[test]
    fn test_insert_new_refuses_overwrite() {
        let mut store = ContactStore::new();
        assert!(store.insert_new("Alice".into(), contact("5551234567")).is_some());
        assert!(store.insert_new("Alice".into(), contact("5559999999")).is_none());
        assert_eq!(store.get("Alice").unwrap().phone.as_str(), "5551234567");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = ContactStore::new();
        for name in ["Carol", "Alice", "Bob"] {
            store.insert_new(name.into(), contact("5551234567"));
        }
        store.remove("Alice");
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["Carol", "Bob"]);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut store = ContactStore::new();
        store.insert_new("Zed".into(), contact("5551234567"));
        store.insert_new("Amy".into(), contact("5551234567"));
        let json = serde_json::to_string(&store).unwrap();
        assert!(json.find("Zed").unwrap() < json.find("Amy").unwrap());
    }

    #[test]
    fn test_deserialize_rejects_blank_key() {
        let json = r#"{"  ":{"phone":"5551234567","email":null,"address":null,"group":"Other","created_at":"t","updated_at":"t"}}"#;
        let result: Result<ContactStore, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_empty_object() {
        let store: ContactStore = serde_json::from_str("{}").unwrap();
        assert!(store.is_empty());
    }
}
