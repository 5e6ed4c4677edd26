//! Standings calculator: derives win/loss records from the match log

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CoreError, IntegrityError};
use crate::types::{Competitor, CompetitorId, MatchResult, StandingRecord};

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    wins: u32,
    losses: u32,
}

/// Compute one standing per competitor, ranked by wins.
///
/// Competitors with no matches get a zero record. Ties on wins are broken by
/// ascending id, so the output is identical for identical input.
///
/// # Errors
/// Returns [`CoreError::Integrity`] if the competitor list repeats an id, or if
/// a match names an unregistered competitor or the same competitor on both
/// sides. Nothing is counted in that case.
pub fn compute_standings(
    competitors: &[Competitor],
    matches: &[MatchResult],
) -> Result<Vec<StandingRecord>, CoreError> {
    let mut slots: HashMap<CompetitorId, usize> = HashMap::with_capacity(competitors.len());
    for (slot, competitor) in competitors.iter().enumerate() {
        if slots.insert(competitor.id, slot).is_some() {
            return Err(IntegrityError::DuplicateCompetitor { id: competitor.id }.into());
        }
    }

    let mut tallies = vec![Tally::default(); competitors.len()];
    for (index, result) in matches.iter().enumerate() {
        let winner = slot_of(&slots, index, result.winner)?;
        let loser = slot_of(&slots, index, result.loser)?;
        if winner == loser {
            return Err(IntegrityError::SelfMatch {
                index,
                id: result.winner,
            }
            .into());
        }
        tallies[winner].wins += 1;
        tallies[loser].losses += 1;
    }

    let mut standings: Vec<StandingRecord> = competitors
        .iter()
        .zip(&tallies)
        .map(|(competitor, tally)| StandingRecord {
            id: competitor.id,
            name: competitor.name.clone(),
            wins: tally.wins,
            matches_played: tally.wins + tally.losses,
        })
        .collect();
    rank(&mut standings);

    debug!(
        competitors = standings.len(),
        matches = matches.len(),
        "computed standings"
    );
    Ok(standings)
}

/// Sort by wins descending, then id ascending
pub fn rank(standings: &mut [StandingRecord]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}

fn slot_of(
    slots: &HashMap<CompetitorId, usize>,
    index: usize,
    id: CompetitorId,
) -> Result<usize, IntegrityError> {
    slots
        .get(&id)
        .copied()
        .ok_or(IntegrityError::UnknownCompetitor { index, id })
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
