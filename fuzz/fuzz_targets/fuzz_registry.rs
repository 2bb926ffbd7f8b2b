#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sxi::ranking::RankTable;
use sxi::registry::{IndexableRegistry, ManifestEntry};

#[derive(Debug, Arbitrary)]
struct Entry {
    identifier: String,
    data_ref: u32,
    icon_ref: u32,
}

fuzz_target!(|entries: Vec<Entry>| {
    let manifest: Vec<_> = entries
        .into_iter()
        .map(|e| ManifestEntry::new(e.identifier, e.data_ref, e.icon_ref))
        .collect();

    // Either a full registry or an error, never a partial one
    if let Ok(registry) = IndexableRegistry::initialize(&manifest, &RankTable::builtin()) {
        assert_eq!(registry.size(), manifest.len());
        for entry in &manifest {
            let record = registry.get(&entry.identifier).unwrap();
            assert_eq!(record.data_ref, entry.data_ref);
            assert_eq!(record.icon_ref, entry.icon_ref);
        }
    }
});
