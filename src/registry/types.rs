use serde::{Deserialize, Serialize};

/// Opaque integer handle naming an external resource (data source or icon)
pub type ResId = u32;

/// Search ranking priority, produced by a [`RankingProvider`](crate::ranking::RankingProvider)
pub type Rank = i32;

/// Sentinel data reference: the entry has no external structured data source
/// and is indexed from its identifier and metadata alone.
pub const NO_DATA_RES_ID: ResId = 0;

/// One line of the manifest: the configuration a record is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub identifier: String,
    /// Data source reference, `NO_DATA_RES_ID` when absent
    #[serde(default)]
    pub data_ref: ResId,
    pub icon_ref: ResId,
}

impl ManifestEntry {
    pub fn new(identifier: impl Into<String>, data_ref: ResId, icon_ref: ResId) -> Self {
        Self {
            identifier: identifier.into(),
            data_ref,
            icon_ref,
        }
    }
}

/// Search-indexable metadata for one settings screen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexableRecord {
    pub identifier: String,
    pub rank: Rank,
    pub data_ref: ResId,
    pub icon_ref: ResId,
}

impl IndexableRecord {
    /// Whether this record points at an external data source
    #[inline]
    pub fn has_data_source(&self) -> bool {
        self.data_ref != NO_DATA_RES_ID
    }

    /// The external data source, or `None` for the sentinel
    pub fn data_source(&self) -> Option<ResId> {
        self.has_data_source().then_some(self.data_ref)
    }
}

/// What to do when the manifest lists the same identifier twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail initialization with a configuration error
    #[default]
    Reject,
    /// Keep the later entry (historical map-overwrite behaviour)
    LastWriteWins,
}

/// Options controlling registry initialization
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RegistryOptions {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_means_no_source() {
        let record = IndexableRecord {
            identifier: "wifi.Settings".to_string(),
            rank: 1,
            data_ref: NO_DATA_RES_ID,
            icon_ref: 7,
        };
        assert!(!record.has_data_source());
        assert_eq!(record.data_source(), None);

        let with_source = IndexableRecord {
            data_ref: 42,
            ..record
        };
        assert!(with_source.has_data_source());
        assert_eq!(with_source.data_source(), Some(42));
    }

    #[test]
    fn test_manifest_entry_data_ref_defaults_to_sentinel() {
        let json = r#"{"identifier": "a.B", "icon_ref": 3}"#;
        let entry: ManifestEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, ManifestEntry::new("a.B", NO_DATA_RES_ID, 3));
    }

    #[test]
    fn test_duplicate_policy_serialization() {
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Reject);

        let parsed: DuplicatePolicy = serde_json::from_str(r#""last_write_wins""#).unwrap();
        assert_eq!(parsed, DuplicatePolicy::LastWriteWins);
    }
}
