//! Top-N leaderboard persistence for the numguess game.
//!
//! The leaderboard is a short ranked list of past scores, stored as a single
//! JSON blob under a fixed key. It is read in full on every access and
//! rewritten in full on every insert.
//!
//! # Architecture
//!
//! ```text
//! Leaderboard (rank, trim, fail-open)
//!     |
//!     +-- KeyValueStore trait
//!         |-- MemoryStore  (tests, ephemeral play)
//!         +-- FileStore    (one JSON file per key)
//! ```
//!
//! Storage failures never reach the caller. A failed or corrupt read is
//! treated as an empty leaderboard; a failed write still returns the ranked
//! list that would have been saved.
//!
//! # Modules
//!
//! - [`leaderboard`] -- The [`Leaderboard`] load/submit contract
//! - [`store`] -- The [`KeyValueStore`] trait and its implementations
//! - [`error`] -- Storage error types

pub mod error;
pub mod leaderboard;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use leaderboard::{Leaderboard, LeaderboardSettings};
pub use store::{FileStore, KeyValueStore, MemoryStore};
