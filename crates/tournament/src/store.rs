//! Record store: durable competitors and the append-only match log
//!
//! The core never holds a store; callers pass one to [`crate::Tournament`].

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use swiss_core::{Competitor, CompetitorId, MatchResult};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage could not be reached
    #[error("record store at {path} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("record store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no competitor with id {0}")]
    UnknownCompetitor(CompetitorId),

    #[error("competitor {0} cannot play against itself")]
    SelfMatch(CompetitorId),

    #[error("cannot delete competitors while {count} match results are recorded")]
    MatchesRecorded { count: usize },
}

/// Point-in-time view of everything the core needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub competitors: Vec<Competitor>,
    pub matches: Vec<MatchResult>,
}

/// CRUD boundary to whatever holds tournament data.
pub trait RecordStore {
    fn list_competitors(&self) -> Result<Vec<Competitor>, StoreError>;

    fn list_matches(&self) -> Result<Vec<MatchResult>, StoreError>;

    /// Register a competitor and return its newly assigned id
    fn register_competitor(&mut self, name: &str) -> Result<CompetitorId, StoreError>;

    /// Append a match result. Both ids must be registered and distinct.
    fn record_match(&mut self, winner: CompetitorId, loser: CompetitorId) -> Result<(), StoreError>;

    fn delete_matches(&mut self) -> Result<(), StoreError>;

    /// Remove all competitors. Fails while any match result still references them.
    fn delete_competitors(&mut self) -> Result<(), StoreError>;

    fn count_competitors(&self) -> Result<usize, StoreError> {
        Ok(self.list_competitors()?.len())
    }

    /// Competitors and matches read together.
    ///
    /// Stores that can read both in one go should override this so no match
    /// lands between the two reads.
    fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot {
            competitors: self.list_competitors()?,
            matches: self.list_matches()?,
        })
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.delete_matches()?;
        self.delete_competitors()
    }
}

/// The stored document shared by the in-memory and JSON stores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Records {
    /// Next id to hand out; never rewinds, so ids are not reused
    pub next_id: CompetitorId,
    pub competitors: Vec<Competitor>,
    pub matches: Vec<MatchResult>,
}

impl Default for Records {
    fn default() -> Self {
        Self {
            next_id: 1,
            competitors: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl Records {
    fn is_registered(&self, id: CompetitorId) -> bool {
        self.competitors.iter().any(|c| c.id == id)
    }

    fn register(&mut self, name: &str) -> CompetitorId {
        let id = self.next_id;
        self.next_id += 1;
        self.competitors.push(Competitor::new(id, name));
        id
    }

    fn append_match(&mut self, winner: CompetitorId, loser: CompetitorId) -> Result<(), StoreError> {
        if winner == loser {
            return Err(StoreError::SelfMatch(winner));
        }
        for id in [winner, loser] {
            if !self.is_registered(id) {
                return Err(StoreError::UnknownCompetitor(id));
            }
        }
        self.matches.push(MatchResult::new(winner, loser));
        Ok(())
    }

    fn remove_competitors(&mut self) -> Result<(), StoreError> {
        if !self.matches.is_empty() {
            return Err(StoreError::MatchesRecorded {
                count: self.matches.len(),
            });
        }
        self.competitors.clear();
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            competitors: self.competitors.clone(),
            matches: self.matches.clone(),
        }
    }
}

/// Store kept entirely in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Records,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, e.g. a fixture with a broken match log
    pub fn from_records(records: Records) -> Self {
        Self { records }
    }
}

impl RecordStore for MemoryStore {
    fn list_competitors(&self) -> Result<Vec<Competitor>, StoreError> {
        Ok(self.records.competitors.clone())
    }

    fn list_matches(&self) -> Result<Vec<MatchResult>, StoreError> {
        Ok(self.records.matches.clone())
    }

    fn register_competitor(&mut self, name: &str) -> Result<CompetitorId, StoreError> {
        Ok(self.records.register(name))
    }

    fn record_match(&mut self, winner: CompetitorId, loser: CompetitorId) -> Result<(), StoreError> {
        self.records.append_match(winner, loser)
    }

    fn delete_matches(&mut self) -> Result<(), StoreError> {
        self.records.matches.clear();
        Ok(())
    }

    fn delete_competitors(&mut self) -> Result<(), StoreError> {
        self.records.remove_competitors()
    }

    fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(self.records.snapshot())
    }
}

/// Store persisted as a single pretty-printed JSON document.
///
/// Every call reads the file fresh. Access is serialized across handles and
/// processes by an advisory lock on a sidecar `<path>.lock` file: reads take
/// it shared, read-modify-write cycles take it exclusive. Writes go to a
/// uniquely named temp file in the same directory that is then persisted over
/// the original. A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored records
    pub fn load(&self) -> Result<Records, StoreError> {
        let lock = self.open_lock()?;
        FileExt::lock_shared(&lock).map_err(|source| self.unavailable(source))?;
        // The lock is released when `lock` is closed
        self.read_records()
    }

    fn read_records(&self) -> Result<Records, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no record file yet, starting empty");
                return Ok(Records::default());
            }
            Err(source) => return Err(self.unavailable(source)),
        };
        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file atomically. Caller must hold the exclusive lock.
    fn write_records(&self, records: &Records) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp =
            NamedTempFile::new_in(self.parent_dir()).map_err(|source| self.unavailable(source))?;
        tmp.write_all(json.as_bytes())
            .map_err(|source| self.unavailable(source))?;
        tmp.persist(&self.path)
            .map_err(|e| self.unavailable(e.error))?;
        Ok(())
    }

    fn update<T>(
        &mut self,
        change: impl FnOnce(&mut Records) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let lock = self.open_lock()?;
        FileExt::lock_exclusive(&lock).map_err(|source| self.unavailable(source))?;

        let mut records = self.read_records()?;
        let value = change(&mut records)?;
        self.write_records(&records)?;
        Ok(value)
    }

    fn open_lock(&self) -> Result<File, StoreError> {
        let mut lock_path = self.path.clone().into_os_string();
        lock_path.push(".lock");
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(PathBuf::from(lock_path))
            .map_err(|source| self.unavailable(source))
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn unavailable(&self, source: std::io::Error) -> StoreError {
        StoreError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn list_competitors(&self) -> Result<Vec<Competitor>, StoreError> {
        Ok(self.load()?.competitors)
    }

    fn list_matches(&self) -> Result<Vec<MatchResult>, StoreError> {
        Ok(self.load()?.matches)
    }

    fn register_competitor(&mut self, name: &str) -> Result<CompetitorId, StoreError> {
        let id = self.update(|records| Ok(records.register(name)))?;
        debug!(id, "wrote competitor");
        Ok(id)
    }

    fn record_match(&mut self, winner: CompetitorId, loser: CompetitorId) -> Result<(), StoreError> {
        self.update(|records| records.append_match(winner, loser))?;
        debug!(winner, loser, "wrote match result");
        Ok(())
    }

    fn delete_matches(&mut self) -> Result<(), StoreError> {
        self.update(|records| {
            records.matches.clear();
            Ok(())
        })
    }

    fn delete_competitors(&mut self) -> Result<(), StoreError> {
        self.update(Records::remove_competitors)
    }

    fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(self.load()?.snapshot())
    }

    fn clear_all(&mut self) -> Result<(), StoreError> {
        self.update(|records| {
            records.matches.clear();
            records.remove_competitors()
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
