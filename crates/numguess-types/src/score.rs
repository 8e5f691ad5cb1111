//! Leaderboard entries.
//!
//! The serialized form of a `Vec<ScoreEntry>` is the persisted leaderboard
//! blob: a JSON array of `{name, score, date}` objects.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One recorded score. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScoreEntry {
    /// Player name as submitted (trimmed).
    pub name: String,
    /// Final game score.
    pub score: u32,
    /// Local date the score was recorded, formatted `YYYY-MM-DD`.
    pub date: String,
}

impl ScoreEntry {
    /// Create a score entry.
    pub fn new(name: impl Into<String>, score: u32, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            date: date.into(),
        }
    }
}
