//! The ranked, bounded score list.
//!
//! # Ordering
//!
//! Entries are sorted by score, highest first. The sort is stable, so equal
//! scores keep the order in which they were submitted. After each insert the
//! list is truncated to [`LeaderboardSettings::capacity`] entries.

use std::cmp::Reverse;

use chrono::Local;
use numguess_types::ScoreEntry;
use tracing::{debug, warn};

use crate::store::KeyValueStore;

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "adivina_numero_scores";

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 5;

/// Name recorded for blank submissions when none is configured.
pub const DEFAULT_ANONYMOUS_NAME: &str = "Anonymous";

/// Date format of [`ScoreEntry::date`].
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tunables for a [`Leaderboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSettings {
    /// Storage key of the blob.
    pub key: String,
    /// Maximum number of entries kept.
    pub capacity: usize,
    /// Name substituted for empty or whitespace-only names.
    pub anonymous_name: String,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_owned(),
            capacity: DEFAULT_CAPACITY,
            anonymous_name: DEFAULT_ANONYMOUS_NAME.to_owned(),
        }
    }
}

/// A top-N leaderboard over an injected [`KeyValueStore`].
#[derive(Debug)]
pub struct Leaderboard<S> {
    store: S,
    settings: LeaderboardSettings,
}

impl<S: KeyValueStore> Leaderboard<S> {
    /// Create a leaderboard with default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, LeaderboardSettings::default())
    }

    /// Create a leaderboard with explicit settings.
    pub const fn with_settings(store: S, settings: LeaderboardSettings) -> Self {
        Self { store, settings }
    }

    /// The active settings.
    pub const fn settings(&self) -> &LeaderboardSettings {
        &self.settings
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted leaderboard.
    ///
    /// The result is ranked and capped like a fresh submission, even if the
    /// stored blob is not. Returns an empty list if nothing is stored, the
    /// store cannot be read, or the stored blob is not a valid score list.
    pub fn load(&self) -> Vec<ScoreEntry> {
        let key = self.settings.key.as_str();
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key, error = %err, "leaderboard read failed, using empty list");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ScoreEntry>>(&raw) {
            Ok(mut entries) => {
                rank(&mut entries, self.settings.capacity);
                entries
            }
            Err(err) => {
                warn!(key, error = %err, "leaderboard data is malformed, using empty list");
                Vec::new()
            }
        }
    }

    /// Record a score dated today and return the updated leaderboard.
    ///
    /// See [`Leaderboard::submit_dated`].
    pub fn submit(&mut self, name: &str, score: u32) -> Vec<ScoreEntry> {
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
        self.submit_dated(name, score, &today)
    }

    /// Record a score with an explicit date and return the updated
    /// leaderboard.
    ///
    /// Blank names are replaced with the anonymous name; other names are
    /// trimmed. The new list is persisted in full. If persisting fails the
    /// failure is logged and the list is returned anyway.
    pub fn submit_dated(&mut self, name: &str, score: u32, date: &str) -> Vec<ScoreEntry> {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            self.settings.anonymous_name.clone()
        } else {
            trimmed.to_owned()
        };
        debug!(name = %name, score, "submitting score");

        let mut entries = self.load();
        entries.push(ScoreEntry::new(name, score, date));
        rank(&mut entries, self.settings.capacity);

        self.persist(&entries);
        entries
    }

    fn persist(&mut self, entries: &[ScoreEntry]) {
        let key = self.settings.key.as_str();
        let blob = match serde_json::to_string(entries) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(key, error = %err, "failed to serialize leaderboard");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &blob) {
            warn!(key, error = %err, "leaderboard write failed, keeping in-memory result");
        }
    }
}

/// Stable-sort by descending score and keep the first `capacity` entries.
fn rank(entries: &mut Vec<ScoreEntry>, capacity: usize) {
    entries.sort_by_key(|entry| Reverse(entry.score));
    entries.truncate(capacity);
}
