//! Persistence backends for the catalog.
//!
//! The catalog is one unit of storage: the whole record list is read once at
//! startup and rewritten in full after every mutation. Backends are
//! pluggable so the store can be exercised against an in-memory fake.

use crate::record::CodeRecord;
use crate::safe_io::atomic_write_json;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

/// File name of the stored snapshot under the data directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// A sink that loads and saves whole catalog snapshots.
pub trait CatalogStorage {
    /// Load the stored snapshot.
    ///
    /// Returns `Ok(None)` when nothing usable is stored — including when a
    /// stored value exists but is corrupt. A corrupt value is discarded by
    /// the backend so the next save starts clean; corruption never surfaces
    /// as an error to the caller, which substitutes the seed catalog.
    fn load(&self) -> io::Result<Option<Vec<CodeRecord>>>;

    /// Replace the stored snapshot with `records`.
    fn save(&self, records: &[CodeRecord]) -> io::Result<()>;
}

/// Catalog snapshot stored as one JSON array in a fixed file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at the fixed catalog file under `data_dir`.
    pub fn new(data_dir: &std::path::Path) -> Self {
        Self {
            path: data_dir.join(CATALOG_FILE),
        }
    }

    /// Path of the stored snapshot.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogStorage for JsonFileStorage {
    fn load(&self) -> io::Result<Option<Vec<CodeRecord>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        match serde_json::from_str(&contents) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                eprintln!(
                    "[WARN] {}: discarding malformed catalog: {}",
                    self.path.display(),
                    e
                );
                // Remove the corrupt file so it is not re-read next start.
                if let Err(e) = fs::remove_file(&self.path) {
                    eprintln!("[WARN] {}: could not remove: {}", self.path.display(), e);
                }
                Ok(None)
            }
        }
    }

    fn save(&self, records: &[CodeRecord]) -> io::Result<()> {
        atomic_write_json(&self.path, &records)
    }
}

/// In-memory storage fake for tests and embedders that manage their own
/// persistence. Records save calls so tests can assert persistence timing.
#[derive(Default)]
pub struct MemoryStorage {
    stored: RefCell<Option<Vec<CodeRecord>>>,
    save_count: RefCell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stored snapshot already present.
    pub fn with_records(records: Vec<CodeRecord>) -> Self {
        Self {
            stored: RefCell::new(Some(records)),
            save_count: RefCell::new(0),
        }
    }

    /// Number of `save` calls observed.
    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }

    /// The last saved snapshot, if any.
    pub fn stored(&self) -> Option<Vec<CodeRecord>> {
        self.stored.borrow().clone()
    }
}

impl CatalogStorage for MemoryStorage {
    fn load(&self) -> io::Result<Option<Vec<CodeRecord>>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, records: &[CodeRecord]) -> io::Result<()> {
        *self.stored.borrow_mut() = Some(records.to_vec());
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<CodeRecord> {
        vec![CodeRecord {
            id: "A".to_string(),
            code: "73202E".to_string(),
            name_ch: "闌尾切除術".to_string(),
            name_en: "Appendectomy".to_string(),
        }]
    }

    #[test]
    fn test_file_storage_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());

        let records = sample_records();
        storage.save(&records).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_file_storage_discards_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());

        fs::write(storage.path(), "not json {{{").unwrap();

        assert!(storage.load().unwrap().is_none());
        assert!(!storage.path().exists(), "corrupt file should be removed");
    }

    #[test]
    fn test_file_storage_discards_wrong_shape() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path());

        // Valid JSON, wrong shape for a record array.
        fs::write(storage.path(), r#"{"surgicalCodes": 1}"#).unwrap();

        assert!(storage.load().unwrap().is_none());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_memory_storage_counts_saves() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save(&sample_records()).unwrap();
        storage.save(&[]).unwrap();

        assert_eq!(storage.save_count(), 2);
        assert_eq!(storage.stored(), Some(Vec::new()));
    }
}
