//! Rank assignment for indexable entries
//!
//! The registry asks a [`RankingProvider`] for exactly one rank per manifest
//! entry while it is being built and stores the answer in the record. The
//! shipped provider is [`RankTable`]; tests usually pass a closure.

pub mod table;

pub use table::{RankTable, RankingConfig};

use crate::registry::types::Rank;

/// Errors a ranking provider can report for an identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    /// The provider has no rank for this identifier and no fallback
    #[error("no rank defined for {identifier}")]
    Unranked { identifier: String },
    /// The provider failed for another reason
    #[error("ranking {identifier} failed: {reason}")]
    Failed { identifier: String, reason: String },
}

/// Maps an identifier to its search rank.
///
/// Implementations must be deterministic: the same identifier always yields
/// the same result.
pub trait RankingProvider {
    fn rank(&self, identifier: &str) -> Result<Rank, RankingError>;
}

impl<F> RankingProvider for F
where
    F: Fn(&str) -> Result<Rank, RankingError>,
{
    fn rank(&self, identifier: &str) -> Result<Rank, RankingError> {
        self(identifier)
    }
}
