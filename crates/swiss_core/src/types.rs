use serde::{Deserialize, Serialize};

/// Store-assigned competitor identifier. Never reused.
pub type CompetitorId = u32;

/// A registered competitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    /// Display name, not necessarily unique
    pub name: String,
}

impl Competitor {
    pub fn new(id: CompetitorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Outcome of a single match. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: CompetitorId,
    pub loser: CompetitorId,
}

impl MatchResult {
    pub fn new(winner: CompetitorId, loser: CompetitorId) -> Self {
        Self { winner, loser }
    }
}

/// A competitor's derived record. Recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub id: CompetitorId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl StandingRecord {
    /// Matches played minus wins, floored at zero for inconsistent records
    pub fn losses(&self) -> u32 {
        self.matches_played.saturating_sub(self.wins)
    }
}

/// Two competitors drawn to meet in the next round.
///
/// Names are captured when the pairing is generated, so a pairing stays
/// meaningful even if the store changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: CompetitorId,
    pub name1: String,
    pub id2: CompetitorId,
    pub name2: String,
}

impl Pairing {
    pub fn from_records(a: &StandingRecord, b: &StandingRecord) -> Self {
        Self {
            id1: a.id,
            name1: a.name.clone(),
            id2: b.id,
            name2: b.name.clone(),
        }
    }

    pub fn contains(&self, id: CompetitorId) -> bool {
        self.id1 == id || self.id2 == id
    }

    pub fn ids(&self) -> (CompetitorId, CompetitorId) {
        (self.id1, self.id2)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
