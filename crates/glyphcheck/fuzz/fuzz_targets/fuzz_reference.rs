//! Fuzz target for the reference database parser.

#![no_main]

use glyphcheck::ReferenceDatabase;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let db = ReferenceDatabase::build(text);
        for entry in db.iter() {
            assert_eq!(db.lookup(&entry.character), Some(entry.code.as_str()));
            assert!(!entry.code.is_empty());
        }
    }
});
