//! Authoritative character → code mapping.
//!
//! The reference corpus is a tab-separated file ordered by descending
//! frequency: `code<TAB>character<TAB>...`. When a character appears more
//! than once, the first record wins.
//!
//! ```
//! use glyphcheck::reference::ReferenceDatabase;
//!
//! let db = ReferenceDatabase::build("ab\t明\t10\ncd\t林\t5\n");
//! assert_eq!(db.lookup("明"), Some("AB"));
//! assert_eq!(db.lookup("炎"), None);
//! ```

mod database;

pub use database::{CodeCheck, LookupResult, ReferenceDatabase, ReferenceEntry};
