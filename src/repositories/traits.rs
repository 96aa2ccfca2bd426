use crate::error::StorageResult;
use crate::models::ContactStore;

/// Repository for persisting the contact store.
///
/// The whole store is read or written in one call; there is no partial
/// or streaming access. Implementations: JSON file on disk, in-memory
/// mock in tests.
pub trait ContactRepository {
    /// Load the entire store.
    ///
    /// Returns `None` when nothing has ever been saved, which is distinct
    /// from a saved store with no contacts.
    fn load(&self) -> StorageResult<Option<ContactStore>>;

    /// Replace the persisted store with `store`.
    fn save(&self, store: &ContactStore) -> StorageResult<()>;
}
