//! Tournament configuration, read from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swiss_core::PairingMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Shown in report headings
    pub name: String,
    /// JSON file holding competitors and match results
    pub store_path: PathBuf,
    pub pairing_mode: PairingMode,
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Swiss Tournament".to_string(),
            store_path: PathBuf::from("tournament.json"),
            pairing_mode: PairingMode::Bridged,
            log_filter: "info".to_string(),
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Like [`TournamentConfig::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
