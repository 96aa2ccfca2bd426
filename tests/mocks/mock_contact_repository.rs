use contact_book::error::{StorageError, StorageResult};
use contact_book::models::ContactStore;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps the "persisted" store in memory, tracks method calls for
/// verification, and can be told to fail saves.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    stored: Arc<Mutex<Option<ContactStore>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a repository that has never been saved to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `store`.
    pub fn with_store(store: ContactStore) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(store);
        repo
    }

    /// The last saved store, if any.
    pub fn saved(&self) -> Option<ContactStore> {
        self.stored.lock().unwrap().clone()
    }

    /// Make every later `save` fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> StorageResult<Option<ContactStore>> {
        self.track_call("load");
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, store: &ContactStore) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: PathBuf::from("mock.json"),
                source: io::Error::other("disk full"),
            });
        }

        *self.stored.lock().unwrap() = Some(store.clone());
        Ok(())
    }
}
