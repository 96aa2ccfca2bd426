//! Contact statistics.

use crate::models::ContactStore;
use indexmap::IndexMap;
use std::fmt;

/// Total contact count and a frequency table of groups.
///
/// Groups are listed in the order they are first seen in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStatistics {
    pub total: usize,
    pub groups: IndexMap<String, usize>,
}

impl ContactStatistics {
    /// Tally the store in a single pass.
    pub fn from_store(store: &ContactStore) -> Self {
        let mut stats = Self::default();
        for (_, contact) in store.iter() {
            stats.total += 1;
            *stats.groups.entry(contact.group.clone()).or_insert(0) += 1;
        }
        stats
    }

    /// Number of contacts in `group`, zero if unknown.
    pub fn group_count(&self, group: &str) -> usize {
        self.groups.get(group).copied().unwrap_or(0)
    }
}

impl fmt::Display for ContactStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Contacts: {}", self.total)?;
        for (group, count) in &self.groups {
            writeln!(f, "{}: {} contact(s)", group, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ContactService, FixedClock, NewContact};

    fn add(store: &mut ContactStore, name: &str, group: &str) {
        ContactService::with_clock(FixedClock("t".into()))
            .add(
                store,
                NewContact {
                    name: name.into(),
                    phone: "5551234567".into(),
                    group: group.into(),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    #[test]
    fn test_empty_store() {
        let stats = ContactStatistics::from_store(&ContactStore::new());
        assert_eq!(stats.total, 0);
        assert!(stats.groups.is_empty());
        assert_eq!(stats.to_string(), "Total Contacts: 0\n");
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let mut store = ContactStore::new();
        add(&mut store, "A", "Work");
        add(&mut store, "B", "Family");
        add(&mut store, "C", "Work");
        add(&mut store, "D", "");

        let stats = ContactStatistics::from_store(&store);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.group_count("Work"), 2);
        assert_eq!(stats.group_count("Other"), 1);
        assert_eq!(stats.group_count("Friends"), 0);
        assert_eq!(
            stats.to_string(),
            "Total Contacts: 4\nWork: 2 contact(s)\nFamily: 1 contact(s)\nOther: 1 contact(s)\n"
        );
    }
}
