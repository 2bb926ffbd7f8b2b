use super::types::IndexableRecord;
use ahash::AHashMap;

/// Immutable catalog of indexable records keyed by identifier.
///
/// Built once by [`IndexableRegistry::initialize`] and never modified
/// afterwards, so a shared reference (or an `Arc`) can be handed to any
/// number of reader threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexableRegistry {
    pub(super) records: AHashMap<String, IndexableRecord>,
}

impl IndexableRegistry {
    /// Number of distinct registered identifiers
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Point lookup; `None` when the identifier is not registered
    pub fn get(&self, identifier: &str) -> Option<&IndexableRecord> {
        self.records.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    /// Every registered record, in no particular order.
    /// Each call starts a fresh enumeration.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &IndexableRecord> + '_ {
        self.records.values()
    }

    /// Every registered identifier, in no particular order
    pub fn identifiers(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    /// Records sorted by rank, then identifier (stable display order)
    pub fn records_by_rank(&self) -> Vec<&IndexableRecord> {
        let mut sorted: Vec<_> = self.records.values().collect();
        sorted.sort_by(|a, b| {
            a.rank
                .cmp(&b.rank)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
        sorted
    }
}

impl<'a> IntoIterator for &'a IndexableRegistry {
    type Item = &'a IndexableRecord;
    type IntoIter = std::collections::hash_map::Values<'a, String, IndexableRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
