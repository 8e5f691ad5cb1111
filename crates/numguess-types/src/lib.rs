//! Shared type definitions for the numguess game.
//!
//! Types defined here cross the boundary between the game core and whatever
//! presents it. They flow downstream to `TypeScript` via `ts-rs` so a web
//! front-end can render the same events the terminal client does.
//!
//! # Modules
//!
//! - [`level`] -- Immutable per-level difficulty settings
//! - [`events`] -- Events and guess results produced by the level engine
//! - [`score`] -- Leaderboard entries

pub mod events;
pub mod level;
pub mod score;

// Re-export all public types at crate root for convenience.
pub use events::{GameEvent, GameOutcome, GuessResult, HintDirection};
pub use level::LevelConfig;
pub use score::ScoreEntry;
