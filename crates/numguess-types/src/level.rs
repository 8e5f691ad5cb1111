//! Per-level difficulty settings.
//!
//! An ordered list of [`LevelConfig`] values is the game's difficulty curve.
//! The list is configuration: the engine receives it at construction and
//! never hardcodes it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One difficulty stage: its number range, attempt budget, and base points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LevelConfig {
    /// Level number shown to the player (1-indexed by convention).
    pub level_number: u32,
    /// Upper bound of the target range. The target is drawn from
    /// `1..=max_value`.
    pub max_value: u32,
    /// Number of guesses allowed before the level is lost.
    pub max_attempts: u32,
    /// Points awarded for clearing the level before the attempt bonus.
    pub base_points: u32,
}

impl LevelConfig {
    /// Create a level configuration.
    pub const fn new(
        level_number: u32,
        max_value: u32,
        max_attempts: u32,
        base_points: u32,
    ) -> Self {
        Self {
            level_number,
            max_value,
            max_attempts,
            base_points,
        }
    }
}
