//! Swiss-system tournament core
//!
//! Pure computations over a snapshot of competitors and match results:
//! - Standings: win/loss records ranked by wins (ties broken by id)
//! - Pairing: the next round's pairings, equal records meeting first
//!
//! Nothing in this crate performs I/O. Callers fetch a consistent snapshot
//! from their record store and pass it in.

pub mod error;
pub mod pairing;
pub mod standings;
pub mod types;

pub use error::{CoreError, IntegrityError};
pub use pairing::{compute_pairings, pair_round, unpaired, PairingMode};
pub use standings::{compute_standings, rank};
pub use types::*;
