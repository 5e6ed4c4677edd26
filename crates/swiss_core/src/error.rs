//! Errors raised by the standings and pairing computations

use crate::types::CompetitorId;

/// The record store handed us data that cannot be counted correctly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("match #{index} references unknown competitor {id}")]
    UnknownCompetitor { index: usize, id: CompetitorId },

    #[error("match #{index} has competitor {id} as both winner and loser")]
    SelfMatch { index: usize, id: CompetitorId },

    #[error("competitor {id} appears more than once")]
    DuplicateCompetitor { id: CompetitorId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("pairing needs at least 2 competitors, got {count}")]
    InsufficientData { count: usize },
}
