//! Pairing engine: turns ranked standings into the next round's pairings

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, IntegrityError};
use crate::standings::rank;
use crate::types::{CompetitorId, Pairing, StandingRecord};

/// How competitors without an equal-win partner are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairingMode {
    /// Pair down the ranked order. A leftover from an odd win group meets the
    /// nearest competitor of the next group, so nobody is dropped when the
    /// field is even.
    #[default]
    Bridged,
    /// Only commit pairs with equal wins. Competitors with no unpaired
    /// equal-win partner are left out of the round.
    EqualWinsOnly,
}

impl std::fmt::Display for PairingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairingMode::Bridged => write!(f, "bridged"),
            PairingMode::EqualWinsOnly => write!(f, "equal-wins-only"),
        }
    }
}

impl std::str::FromStr for PairingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bridged" => Ok(PairingMode::Bridged),
            "equal-wins-only" | "equal-wins" => Ok(PairingMode::EqualWinsOnly),
            _ => Err(format!("unknown pairing mode: {}", s)),
        }
    }
}

/// Pair the next round in [`PairingMode::Bridged`] mode
pub fn compute_pairings(standings: &[StandingRecord]) -> Result<Vec<Pairing>, CoreError> {
    pair_round(standings, PairingMode::Bridged)
}

/// Pair the next round.
///
/// The input is re-ranked (wins descending, id ascending) before pairing, so
/// the result only depends on the records, not on the order they arrive in.
/// Pairings come back ordered by the rank of their higher-placed member and
/// no competitor id appears twice.
///
/// With an odd field in bridged mode the lowest-ranked leftover receives no
/// pairing; it can be found with [`unpaired`].
///
/// # Errors
/// [`CoreError::InsufficientData`] for fewer than two records, and
/// [`CoreError::Integrity`] if a competitor id is repeated.
pub fn pair_round(
    standings: &[StandingRecord],
    mode: PairingMode,
) -> Result<Vec<Pairing>, CoreError> {
    if standings.len() < 2 {
        return Err(CoreError::InsufficientData {
            count: standings.len(),
        });
    }

    let mut ids = HashSet::with_capacity(standings.len());
    for record in standings {
        if !ids.insert(record.id) {
            return Err(IntegrityError::DuplicateCompetitor { id: record.id }.into());
        }
    }

    let mut ranked = standings.to_vec();
    rank(&mut ranked);

    let mut slots = match mode {
        PairingMode::Bridged => bridged_slots(&ranked),
        PairingMode::EqualWinsOnly => equal_win_slots(&ranked),
    };
    slots.sort_unstable();

    let left_out = ranked.len() - 2 * slots.len();
    if left_out > 0 {
        warn!(%mode, left_out, "competitors left without a pairing");
    }
    debug!(%mode, pairings = slots.len(), "paired round");

    Ok(slots
        .into_iter()
        .map(|(a, b)| Pairing::from_records(&ranked[a], &ranked[b]))
        .collect())
}

/// Records from `standings` that no pairing covers, in the order given
pub fn unpaired<'a>(standings: &'a [StandingRecord], pairings: &[Pairing]) -> Vec<&'a StandingRecord> {
    let covered: HashSet<CompetitorId> = pairings
        .iter()
        .flat_map(|p| [p.id1, p.id2])
        .collect();
    standings
        .iter()
        .filter(|record| !covered.contains(&record.id))
        .collect()
}

/// Each unpaired competitor takes the next unpaired one below it.
fn bridged_slots(ranked: &[StandingRecord]) -> Vec<(usize, usize)> {
    let mut slots = Vec::with_capacity(ranked.len() / 2);
    let mut waiting: Option<usize> = None;

    for pos in 0..ranked.len() {
        match waiting.take() {
            Some(upper) => {
                if ranked[upper].wins != ranked[pos].wins {
                    debug!(
                        upper = ranked[upper].id,
                        lower = ranked[pos].id,
                        "bridging across win groups"
                    );
                }
                slots.push((upper, pos));
            }
            None => waiting = Some(pos),
        }
    }

    slots
}

/// First-fit over equal-win candidate pairs in ranked order.
fn equal_win_slots(ranked: &[StandingRecord]) -> Vec<(usize, usize)> {
    let mut paired: HashSet<CompetitorId> = HashSet::new();
    let mut slots = Vec::new();

    for a in 0..ranked.len() {
        for b in (a + 1)..ranked.len() {
            // Ranked order keeps equal wins contiguous
            if ranked[b].wins != ranked[a].wins {
                break;
            }
            if paired.contains(&ranked[a].id) || paired.contains(&ranked[b].id) {
                continue;
            }
            paired.insert(ranked[a].id);
            paired.insert(ranked[b].id);
            slots.push((a, b));
        }
    }

    slots
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
