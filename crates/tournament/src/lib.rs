//! Swiss-system tournament tracker
//!
//! This crate provides infrastructure for:
//! - Persisting competitors and match results in a record store
//! - Computing standings and next-round pairings from a store snapshot
//! - Generating text and JSON reports
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tournament -- register "Ada Lovelace"
//! cargo run -p tournament -- report 1 2
//! cargo run -p tournament -- pairings
//! ```

mod config;
mod report;
mod service;
mod store;

pub use config::*;
pub use report::*;
pub use service::*;
pub use store::*;
