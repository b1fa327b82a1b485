//! codefinder-core: Embeddable catalog search for medical procedure codes
//!
//! Holds an ordered catalog of procedure codes (code, Chinese name, English
//! name), answers multi-keyword AND searches over it, computes highlight
//! segments for rendering matches, and persists the catalog as a single JSON
//! snapshot.
//!
//! # Quick Start
//!
//! ```no_run
//! use codefinder_core::{CatalogStore, JsonFileStorage, highlight, resolve_home};
//!
//! fn main() -> std::io::Result<()> {
//!     let home = resolve_home(None)?;
//!     let store = CatalogStore::open(JsonFileStorage::new(&home));
//!
//!     for record in store.search("laparoscopic appendectomy") {
//!         let segments = highlight(&record.name_en, "laparoscopic appendectomy");
//!         println!("{} {:?}", record.code, segments);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod highlight;
pub mod home;
pub mod query;
pub mod record;
pub mod safe_io;
pub mod seed;
pub mod storage;

// Re-export commonly used types
pub use catalog::CatalogStore;
pub use highlight::{Segment, highlight};
pub use home::resolve_home;
pub use query::{search, tokenize};
pub use record::{CodeRecord, RecordFields};
pub use seed::seed_catalog;
pub use storage::{CATALOG_FILE, CatalogStorage, JsonFileStorage, MemoryStorage};
