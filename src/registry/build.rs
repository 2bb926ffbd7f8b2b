use super::reader::IndexableRegistry;
use super::types::{DuplicatePolicy, IndexableRecord, ManifestEntry, RegistryOptions};
use crate::manifest::builtin_manifest;
use crate::ranking::{RankTable, RankingConfig, RankingError, RankingProvider};
use ahash::AHashMap;
use tracing::{debug, info, warn};

/// Errors that abort registry initialization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A manifest entry has an empty identifier
    #[error("manifest entry {position} has an empty identifier")]
    EmptyIdentifier { position: usize },

    /// Two manifest entries share an identifier
    #[error("duplicate identifier {identifier} (manifest entries {first} and {second})")]
    DuplicateIdentifier {
        identifier: String,
        first: usize,
        second: usize,
    },

    /// The ranking provider failed for an entry
    #[error("failed to rank {identifier}")]
    Ranking {
        identifier: String,
        #[source]
        source: RankingError,
    },
}

impl IndexableRegistry {
    /// Build the registry with default options (duplicates rejected)
    pub fn initialize<R>(manifest: &[ManifestEntry], ranking: &R) -> Result<Self, RegistryError>
    where
        R: RankingProvider + ?Sized,
    {
        Self::initialize_with(manifest, ranking, RegistryOptions::default())
    }

    /// Build the registry from a manifest.
    ///
    /// The provider is called once per entry, in manifest order. Any failure
    /// discards everything built so far.
    pub fn initialize_with<R>(
        manifest: &[ManifestEntry],
        ranking: &R,
        options: RegistryOptions,
    ) -> Result<Self, RegistryError>
    where
        R: RankingProvider + ?Sized,
    {
        let mut records: AHashMap<String, IndexableRecord> =
            AHashMap::with_capacity(manifest.len());
        // identifier -> manifest position, for error reporting
        let mut positions: AHashMap<&str, usize> = AHashMap::with_capacity(manifest.len());

        for (position, entry) in manifest.iter().enumerate() {
            if entry.identifier.is_empty() {
                return Err(RegistryError::EmptyIdentifier { position });
            }

            if let Some(&first) = positions.get(entry.identifier.as_str()) {
                match options.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(RegistryError::DuplicateIdentifier {
                            identifier: entry.identifier.clone(),
                            first,
                            second: position,
                        });
                    }
                    DuplicatePolicy::LastWriteWins => {
                        warn!(
                            identifier = %entry.identifier,
                            first,
                            second = position,
                            "duplicate manifest entry overwrites earlier one"
                        );
                    }
                }
            }

            let rank = ranking
                .rank(&entry.identifier)
                .map_err(|source| RegistryError::Ranking {
                    identifier: entry.identifier.clone(),
                    source,
                })?;

            debug!(identifier = %entry.identifier, rank, "registered indexable entry");

            positions.insert(&entry.identifier, position);
            records.insert(
                entry.identifier.clone(),
                IndexableRecord {
                    identifier: entry.identifier.clone(),
                    rank,
                    data_ref: entry.data_ref,
                    icon_ref: entry.icon_ref,
                },
            );
        }

        info!(
            entries = manifest.len(),
            registered = records.len(),
            "indexable registry initialized"
        );

        Ok(Self { records })
    }

    /// The built-in manifest ranked by the built-in table
    pub fn builtin(config: &RankingConfig) -> Result<Self, RegistryError> {
        Self::initialize(&builtin_manifest(), &RankTable::new(config))
    }
}
