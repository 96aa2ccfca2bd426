use crate::error::{StorageError, StorageResult};
use crate::models::ContactStore;
use crate::repositories::traits::ContactRepository;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "contacts_data.json";

const INDENT: &[u8] = b"    ";

/// Contact repository backed by a single JSON document.
///
/// The document is an object mapping contact name to record, indented by
/// four spaces with keys in store order. Saves go to a sibling `.tmp` file
/// that is then renamed over the target, so an interrupted save leaves the
/// previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

/// Render the store exactly as it is written to disk.
pub(crate) fn to_pretty_json(store: &ContactStore) -> StorageResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store.serialize(&mut serializer)?;
    Ok(buf)
}

impl ContactRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Option<ContactStore>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No existing contacts file found, starting fresh");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let store: ContactStore =
            serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            contacts = store.len(),
            "Contacts loaded"
        );
        Ok(Some(store))
    }

    fn save(&self, store: &ContactStore) -> StorageResult<()> {
        let bytes = to_pretty_json(store)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &bytes).map_err(|e| self.io_error(&tmp, e))?;
        debug!(path = %tmp.display(), bytes = bytes.len(), "Wrote temporary contacts file");

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(&self.path, e));
        }

        info!(
            path = %self.path.display(),
            contacts = store.len(),
            "Contacts saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNumber;
    use crate::models::Contact;

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonFileRepository::new("data/contacts.json");
        assert_eq!(repo.temp_path(), PathBuf::from("data/contacts.json.tmp"));
    }

    #[test]
    fn test_default_path() {
        let repo = JsonFileRepository::default();
        assert_eq!(repo.path(), Path::new(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_pretty_json_uses_four_space_indent() {
        let mut store = ContactStore::new();
        store.insert_new(
            "Alice".to_string(),
            Contact::new(PhoneNumber::new("5551234567").unwrap(), "t"),
        );
        let text = String::from_utf8(to_pretty_json(&store).unwrap()).unwrap();
        assert!(text.starts_with("{\n    \"Alice\": {\n        \"phone\": \"5551234567\","));
        assert!(text.contains("        \"email\": null,"));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_load_empty_document_is_some() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{}").unwrap();
        let store = JsonFileRepository::new(&path).load().unwrap();
        assert_eq!(store, Some(ContactStore::new()));
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{ not json").unwrap();
        let repo = JsonFileRepository::new(&path);
        assert!(matches!(repo.load(), Err(StorageError::Parse { .. })));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path());
        assert!(matches!(repo.load(), Err(StorageError::Io { .. })));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested").join("contacts.json"));
        repo.save(&ContactStore::new()).unwrap();
        assert!(repo.path().exists());
        assert!(!repo.temp_path().exists());
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), "{}");
    }
}
