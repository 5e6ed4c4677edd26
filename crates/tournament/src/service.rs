//! Tournament service: wires record store snapshots into the core

use serde::Serialize;
use swiss_core::{
    compute_standings, pair_round, unpaired, CompetitorId, CoreError, Pairing, PairingMode,
    StandingRecord,
};
use tracing::{debug, info};

use crate::store::{RecordStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Standings and pairings computed from one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundPlan {
    pub standings: Vec<StandingRecord>,
    pub pairings: Vec<Pairing>,
    /// Competitors the pairing mode could not place this round
    pub unpaired: Vec<StandingRecord>,
}

/// A Swiss tournament backed by a record store
pub struct Tournament<S: RecordStore> {
    store: S,
    mode: PairingMode,
}

impl<S: RecordStore> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mode: PairingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: PairingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn register_competitor(&mut self, name: &str) -> Result<CompetitorId, TournamentError> {
        let id = self.store.register_competitor(name)?;
        info!(id, name, "registered competitor");
        Ok(id)
    }

    pub fn record_match(
        &mut self,
        winner: CompetitorId,
        loser: CompetitorId,
    ) -> Result<(), TournamentError> {
        self.store.record_match(winner, loser)?;
        info!(winner, loser, "recorded match");
        Ok(())
    }

    pub fn count_competitors(&self) -> Result<usize, TournamentError> {
        Ok(self.store.count_competitors()?)
    }

    pub fn delete_matches(&mut self) -> Result<(), TournamentError> {
        self.store.delete_matches()?;
        info!("deleted all match results");
        Ok(())
    }

    pub fn delete_competitors(&mut self) -> Result<(), TournamentError> {
        self.store.delete_competitors()?;
        info!("deleted all competitors");
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<(), TournamentError> {
        self.store.clear_all()?;
        info!("cleared tournament");
        Ok(())
    }

    /// Current standings, recomputed from a fresh snapshot
    pub fn standings(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        let snapshot = self.store.snapshot()?;
        debug!(
            competitors = snapshot.competitors.len(),
            matches = snapshot.matches.len(),
            "read snapshot"
        );
        Ok(compute_standings(&snapshot.competitors, &snapshot.matches)?)
    }

    /// Pairings for the next round
    pub fn pairings(&self) -> Result<Vec<Pairing>, TournamentError> {
        let standings = self.standings()?;
        Ok(pair_round(&standings, self.mode)?)
    }

    /// Standings, pairings and leftovers from the same snapshot
    pub fn plan_round(&self) -> Result<RoundPlan, TournamentError> {
        let standings = self.standings()?;
        let pairings = pair_round(&standings, self.mode)?;
        let unpaired = unpaired(&standings, &pairings).into_iter().cloned().collect();
        Ok(RoundPlan {
            standings,
            pairings,
            unpaired,
        })
    }
}
