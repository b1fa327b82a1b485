//! The catalog store: owner of the in-memory record list.
//!
//! All reads and mutations go through [`CatalogStore`]. Every successful
//! mutation is immediately followed by a full-snapshot persist; a persist
//! failure is logged and the in-memory state stays authoritative for the
//! rest of the session. Nothing here is fatal — every failure degrades to
//! "keep prior state".

use crate::query;
use crate::record::{CodeRecord, RecordFields, normalize_records};
use crate::seed::seed_catalog;
use crate::storage::CatalogStorage;
use uuid::Uuid;

/// Owns the live catalog and its storage backend.
pub struct CatalogStore<S: CatalogStorage> {
    records: Vec<CodeRecord>,
    storage: S,
}

impl<S: CatalogStorage> CatalogStore<S> {
    /// Load the catalog from `storage`, falling back to the built-in seed
    /// catalog when nothing usable is stored.
    ///
    /// Stored records are normalized (empty or duplicate ids dropped) rather
    /// than trusted. A read error is logged and treated like an absent
    /// snapshot; it never surfaces to the caller.
    pub fn open(storage: S) -> Self {
        let loaded = match storage.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("[WARN] could not read stored catalog: {}", e);
                None
            }
        };
        match loaded {
            Some(records) => Self {
                records: normalize_records(records),
                storage,
            },
            None => {
                let store = Self {
                    records: seed_catalog(),
                    storage,
                };
                // First run (or discarded corrupt data): store the seed so
                // later sessions start from the same snapshot.
                store.persist();
                store
            }
        }
    }

    /// The current snapshot, in catalog order.
    pub fn records(&self) -> &[CodeRecord] {
        &self.records
    }

    /// Keyword search over the current snapshot. See [`query::search`].
    pub fn search(&self, q: &str) -> Vec<&CodeRecord> {
        query::search(&self.records, q)
    }

    /// Create a record with a fresh unique id, prepended to the catalog
    /// (most-recent-first). Persists and returns the new record.
    pub fn create(&mut self, fields: RecordFields) -> CodeRecord {
        let record = CodeRecord::from_fields(Uuid::new_v4().to_string(), fields);
        self.records.insert(0, record.clone());
        self.persist();
        record
    }

    /// Replace the editable fields of the record with `id`, preserving its
    /// position. Returns `false` (and changes nothing) if `id` is absent.
    pub fn update(&mut self, id: &str, fields: RecordFields) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.code = fields.code;
                record.name_ch = fields.name_ch;
                record.name_en = fields.name_en;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns `false` (and changes nothing)
    /// if `id` is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&CodeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The storage backend (test hook for persistence assertions).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.records) {
            eprintln!("[WARN] could not persist catalog: {}", e);
        }
    }
}
