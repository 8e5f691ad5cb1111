//! Level engine and game configuration for the numguess game.
//!
//! This crate owns the rules: level progression, guess evaluation, and
//! scoring. It has no knowledge of how the game is displayed or where the
//! leaderboard lives.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `numguess.yaml` into
//!   strongly-typed structs, including the default difficulty curve.
//! - [`engine`] -- The [`LevelEngine`] state machine.
//!
//! [`LevelEngine`]: engine::LevelEngine

pub mod config;
pub mod engine;

pub use config::{ConfigError, GameConfig, LeaderboardConfig};
pub use engine::{EngineError, LevelEngine, Phase};
