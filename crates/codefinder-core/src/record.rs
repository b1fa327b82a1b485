//! The procedure-code record type and load-time normalization.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One procedure code in the catalog.
///
/// Serialized field names (`id`, `code`, `name_ch`, `name_en`) match the
/// stored data format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    /// Opaque unique identifier, stable across edits. Never reused.
    pub id: String,
    /// Short alphanumeric procedure code. Not unique: the catalog contains
    /// duplicate codes under distinct ids (e.g. insured vs. self-paid
    /// variants of the same procedure).
    pub code: String,
    /// Chinese name of the procedure.
    pub name_ch: String,
    /// English name of the procedure.
    pub name_en: String,
}

/// The three editable fields of a record, as submitted by the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub code: String,
    pub name_ch: String,
    pub name_en: String,
}

impl RecordFields {
    /// True if all three fields are non-empty after trimming.
    ///
    /// This is the required-field contract of the editing surface; the
    /// catalog store itself accepts whatever it is given.
    pub fn is_complete(&self) -> bool {
        !self.code.trim().is_empty()
            && !self.name_ch.trim().is_empty()
            && !self.name_en.trim().is_empty()
    }
}

impl CodeRecord {
    /// Build a record from editable fields with an already-assigned id.
    pub fn from_fields(id: String, fields: RecordFields) -> Self {
        Self {
            id,
            code: fields.code,
            name_ch: fields.name_ch,
            name_en: fields.name_en,
        }
    }

    /// The text the matcher runs over: all three display fields,
    /// space-joined in catalog-column order.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.code, self.name_ch, self.name_en)
    }
}

/// Drop records that violate catalog invariants: empty ids and ids already
/// seen earlier in the list. Stored data is normalized rather than trusted.
///
/// Order of surviving records is preserved; the first occurrence of a
/// duplicated id wins.
pub fn normalize_records(records: Vec<CodeRecord>) -> Vec<CodeRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    records
        .into_iter()
        .filter(|r| !r.id.is_empty() && seen.insert(r.id.clone()))
        .collect()
}
