//! Events and guess results produced by the level engine.
//!
//! The engine never renders anything. It hands these values back to the
//! caller, which decides how to show them and when to drive the next
//! transition.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which way the player should move their next guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum HintDirection {
    /// The target is larger than the guess.
    Higher,
    /// The target is smaller than the guess.
    Lower,
}

/// The outcome of submitting one raw guess to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum GuessResult {
    /// The input was not an integer. No attempt was consumed.
    InvalidInput,
    /// No level is in play (game over, or waiting for the next level).
    Ignored,
    /// Wrong guess with attempts remaining.
    Hint {
        /// Direction toward the target.
        direction: HintDirection,
        /// Attempts remaining after this guess.
        attempts_left: u32,
    },
    /// The guess matched the target. The level is cleared.
    Win {
        /// Points credited for this level.
        level_points: u32,
        /// The target that was guessed.
        target: u32,
    },
    /// The last attempt missed. The game is over.
    Lose {
        /// The target the player failed to find.
        target: u32,
    },
}

/// A transition the caller should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum GameEvent {
    /// A new level is in play.
    LevelStarted {
        /// The level's display number.
        level_number: u32,
        /// Upper bound of the target range (lower bound is always 1).
        max_value: u32,
        /// Attempts the player has for this level.
        attempts_allowed: u32,
    },
    /// Every level has been cleared.
    GameCompleted {
        /// Total score across all levels.
        final_score: u32,
    },
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameOutcome {
    /// `true` when every level was cleared, `false` on a loss.
    pub victory: bool,
    /// Score at the moment the game ended.
    pub final_score: u32,
}
