//! The level engine: progression, guess evaluation, and scoring.
//!
//! A [`LevelEngine`] owns one game at a time. The caller starts it, feeds it
//! raw guesses, and, after a win, decides when to move on to the next level.
//! The engine holds no timers; any pause between levels belongs to the
//! caller.
//!
//! # State Machine
//!
//! ```text
//! NotStarted --start_game--> LevelActive --Win--> LevelWon --advance_level--> LevelActive
//!                                |                    |
//!                                |                    +--advance_level (last level)--> Completed
//!                                +--Lose--> Ended
//! ```
//!
//! `Completed` and `Ended` are terminal until [`LevelEngine::start_game`] is
//! called again.
//!
//! # Scoring
//!
//! Clearing a level credits `base_points + attempts_left * 10`, where
//! `attempts_left` is counted after the winning guess has been consumed.
//! All arithmetic is integer and saturating.

use std::num::IntErrorKind;

use numguess_types::{GameEvent, GameOutcome, GuessResult, HintDirection, LevelConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Points credited per attempt left over when a level is cleared.
const ATTEMPT_BONUS_POINTS: u32 = 10;

/// Errors that can occur during engine construction or transitions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The level sequence cannot be played.
    #[error("invalid level configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },

    /// [`LevelEngine::advance_level`] was called without a cleared level
    /// waiting to advance.
    #[error("cannot advance level from phase {phase:?}")]
    NotAwaitingAdvance {
        /// The phase the engine was in when the call was made.
        phase: Phase,
    },
}

/// Where the engine is in the life of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed, [`LevelEngine::start_game`] not yet called.
    NotStarted,
    /// A level is in play and accepts guesses.
    LevelActive,
    /// The current level was cleared; waiting for
    /// [`LevelEngine::advance_level`].
    LevelWon,
    /// Every level was cleared.
    Completed,
    /// The player ran out of attempts.
    Ended,
}

/// Owns the state of a single game.
///
/// Generic over the random source so tests can inject a seeded generator.
/// [`LevelEngine::new`] uses an OS-seeded [`StdRng`].
#[derive(Debug)]
pub struct LevelEngine<R = StdRng> {
    /// Difficulty curve, in play order. Never empty.
    levels: Vec<LevelConfig>,
    rng: R,
    /// Index into `levels`. Equal to `levels.len()` once the game is
    /// completed.
    level_index: usize,
    target: u32,
    attempts_left: u32,
    /// Running total. Never decreases within a game.
    score: u32,
    phase: Phase,
}

impl LevelEngine<StdRng> {
    /// Create an engine over `levels` with an OS-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `levels` is empty or any
    /// level has a zero `max_value` or `max_attempts`.
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, EngineError> {
        Self::with_rng(levels, StdRng::from_os_rng())
    }

    /// Create an engine whose target draws are reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LevelEngine::new`].
    pub fn seeded(levels: Vec<LevelConfig>, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(levels, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LevelEngine<R> {
    /// Create an engine over `levels` drawing targets from `rng`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`LevelEngine::new`].
    pub fn with_rng(levels: Vec<LevelConfig>, rng: R) -> Result<Self, EngineError> {
        validate_levels(&levels)?;
        Ok(Self {
            levels,
            rng,
            level_index: 0,
            target: 0,
            attempts_left: 0,
            score: 0,
            phase: Phase::NotStarted,
        })
    }

    /// Reset to the first level with a zero score and start it.
    ///
    /// May be called in any phase; an in-progress game is discarded.
    pub fn start_game(&mut self) -> GameEvent {
        self.level_index = 0;
        self.score = 0;
        debug!(levels = self.levels.len(), "game started");
        self.start_level()
    }

    /// Evaluate one raw guess.
    ///
    /// Input that does not parse as an integer yields
    /// [`GuessResult::InvalidInput`] and leaves the game untouched. Integers
    /// too large for `i64` are clamped, so they still count as attempts. A
    /// well-formed guess outside [`Phase::LevelActive`] yields
    /// [`GuessResult::Ignored`], also without touching the game.
    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        let guess = match raw.trim().parse::<i64>() {
            Ok(guess) => guess,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return GuessResult::InvalidInput,
            },
        };

        if self.phase != Phase::LevelActive {
            return GuessResult::Ignored;
        }
        let Some(level) = self.levels.get(self.level_index).copied() else {
            return GuessResult::Ignored;
        };

        self.attempts_left = self.attempts_left.saturating_sub(1);
        let target = i64::from(self.target);

        if guess == target {
            let bonus = self.attempts_left.saturating_mul(ATTEMPT_BONUS_POINTS);
            let level_points = level.base_points.saturating_add(bonus);
            self.score = self.score.saturating_add(level_points);
            self.phase = Phase::LevelWon;
            info!(
                level = level.level_number,
                level_points,
                score = self.score,
                "level cleared"
            );
            return GuessResult::Win {
                level_points,
                target: self.target,
            };
        }

        if self.attempts_left == 0 {
            self.phase = Phase::Ended;
            info!(
                level = level.level_number,
                final_score = self.score,
                "out of attempts, game over"
            );
            return GuessResult::Lose {
                target: self.target,
            };
        }

        let direction = if guess < target {
            HintDirection::Higher
        } else {
            HintDirection::Lower
        };
        debug!(guess, ?direction, attempts_left = self.attempts_left, "miss");
        GuessResult::Hint {
            direction,
            attempts_left: self.attempts_left,
        }
    }

    /// Move past a cleared level.
    ///
    /// Starts the next level, or completes the game if the cleared level
    /// was the last one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotAwaitingAdvance`] unless the engine is in
    /// [`Phase::LevelWon`]. The engine is not modified in that case.
    pub fn advance_level(&mut self) -> Result<GameEvent, EngineError> {
        if self.phase != Phase::LevelWon {
            return Err(EngineError::NotAwaitingAdvance { phase: self.phase });
        }
        self.level_index = self.level_index.saturating_add(1);
        Ok(self.start_level())
    }

    /// Start the level at `level_index`, or complete the game past the end.
    fn start_level(&mut self) -> GameEvent {
        let Some(level) = self.levels.get(self.level_index).copied() else {
            self.level_index = self.levels.len();
            self.attempts_left = 0;
            self.phase = Phase::Completed;
            info!(final_score = self.score, "all levels cleared");
            return GameEvent::GameCompleted {
                final_score: self.score,
            };
        };

        self.target = self.rng.random_range(1..=level.max_value);
        self.attempts_left = level.max_attempts;
        self.phase = Phase::LevelActive;
        debug!(
            level = level.level_number,
            max_value = level.max_value,
            attempts = level.max_attempts,
            "level started"
        );

        GameEvent::LevelStarted {
            level_number: level.level_number,
            max_value: level.max_value,
            attempts_allowed: level.max_attempts,
        }
    }

    /// The current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a level is in play and accepting guesses.
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, Phase::LevelActive)
    }

    /// Running score for the current game.
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Attempts remaining on the current level.
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// The level in play (or just cleared). `None` once the game is
    /// completed.
    pub fn current_level(&self) -> Option<&LevelConfig> {
        self.levels.get(self.level_index)
    }

    /// Display number of the current level.
    pub fn level_number(&self) -> Option<u32> {
        self.current_level().map(|level| level.level_number)
    }

    /// How the game ended, once it has.
    pub const fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Completed => Some(GameOutcome {
                victory: true,
                final_score: self.score,
            }),
            Phase::Ended => Some(GameOutcome {
                victory: false,
                final_score: self.score,
            }),
            Phase::NotStarted | Phase::LevelActive | Phase::LevelWon => None,
        }
    }

    #[cfg(test)]
    const fn target(&self) -> u32 {
        self.target
    }
}

/// Reject level sequences the engine cannot play.
fn validate_levels(levels: &[LevelConfig]) -> Result<(), EngineError> {
    if levels.is_empty() {
        return Err(EngineError::InvalidConfig {
            reason: "at least one level must be configured".to_owned(),
        });
    }
    for level in levels {
        if level.max_value == 0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("level {} has max_value 0", level.level_number),
            });
        }
        if level.max_attempts == 0 {
            return Err(EngineError::InvalidConfig {
                reason: format!("level {} has max_attempts 0", level.level_number),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::SmallRng;

    use super::*;

    fn make_engine(levels: Vec<LevelConfig>) -> LevelEngine<SmallRng> {
        LevelEngine::with_rng(levels, SmallRng::seed_from_u64(7)).unwrap()
    }

    fn single_level(max_value: u32, max_attempts: u32, base_points: u32) -> Vec<LevelConfig> {
        vec![LevelConfig::new(1, max_value, max_attempts, base_points)]
    }

    /// A guess guaranteed to miss the current target.
    fn wrong_guess(engine: &LevelEngine<SmallRng>) -> String {
        (i64::from(engine.target()) + 1).to_string()
    }

    #[test]
    fn empty_levels_rejected() {
        let result = LevelEngine::with_rng(Vec::new(), SmallRng::seed_from_u64(1));
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn zero_max_value_rejected() {
        let result = LevelEngine::with_rng(single_level(0, 5, 100), SmallRng::seed_from_u64(1));
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn zero_attempts_rejected() {
        let result = LevelEngine::with_rng(single_level(10, 0, 100), SmallRng::seed_from_u64(1));
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn new_engine_is_not_started_and_ignores_guesses() {
        let mut engine = make_engine(single_level(10, 5, 100));
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert_eq!(engine.submit_guess("3"), GuessResult::Ignored);
        assert_eq!(engine.attempts_left(), 0);
    }

    #[test]
    fn start_game_emits_level_started() {
        let mut engine = make_engine(vec![
            LevelConfig::new(1, 10, 5, 100),
            LevelConfig::new(2, 50, 7, 200),
        ]);
        let event = engine.start_game();
        assert_eq!(
            event,
            GameEvent::LevelStarted {
                level_number: 1,
                max_value: 10,
                attempts_allowed: 5,
            }
        );
        assert!(engine.is_active());
        assert_eq!(engine.attempts_left(), 5);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.level_number(), Some(1));
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let mut engine = make_engine(single_level(10, 5, 100));
        engine.start_game();

        for raw in ["", "   ", "abc", "4.5", "12abc", "--3"] {
            assert_eq!(engine.submit_guess(raw), GuessResult::InvalidInput, "{raw:?}");
            assert_eq!(engine.attempts_left(), 5);
            assert!(engine.is_active());
        }
    }

    #[test]
    fn invalid_input_after_game_end_is_still_invalid() {
        let mut engine = make_engine(single_level(10, 1, 100));
        engine.start_game();
        let miss = wrong_guess(&engine);
        engine.submit_guess(&miss);
        assert_eq!(engine.phase(), Phase::Ended);
        assert_eq!(engine.submit_guess("nope"), GuessResult::InvalidInput);
        assert_eq!(engine.phase(), Phase::Ended);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let mut engine = make_engine(single_level(10, 5, 100));
        engine.start_game();
        let raw = format!("  {}\n", engine.target());
        assert!(matches!(engine.submit_guess(&raw), GuessResult::Win { .. }));
    }

    #[test]
    fn hint_points_toward_target() {
        let mut engine = make_engine(single_level(100, 10, 100));
        engine.start_game();
        let target = i64::from(engine.target());

        let low = (target - 1).to_string();
        let high = (target + 1).to_string();

        assert_eq!(
            engine.submit_guess(&low),
            GuessResult::Hint {
                direction: HintDirection::Higher,
                attempts_left: 9,
            }
        );
        assert_eq!(
            engine.submit_guess(&high),
            GuessResult::Hint {
                direction: HintDirection::Lower,
                attempts_left: 8,
            }
        );
    }

    #[test]
    fn out_of_range_guesses_still_consume_attempts() {
        let mut engine = make_engine(single_level(10, 5, 100));
        engine.start_game();
        assert_eq!(
            engine.submit_guess("-40"),
            GuessResult::Hint {
                direction: HintDirection::Higher,
                attempts_left: 4,
            }
        );
        assert_eq!(
            engine.submit_guess("9999999999999"),
            GuessResult::Hint {
                direction: HintDirection::Lower,
                attempts_left: 3,
            }
        );
    }

    #[test]
    fn integers_beyond_i64_still_consume_attempts() {
        let mut engine = make_engine(single_level(10, 3, 100));
        engine.start_game();
        assert_eq!(
            engine.submit_guess("99999999999999999999"),
            GuessResult::Hint {
                direction: HintDirection::Lower,
                attempts_left: 2,
            }
        );
        assert_eq!(
            engine.submit_guess(" -99999999999999999999 "),
            GuessResult::Hint {
                direction: HintDirection::Higher,
                attempts_left: 1,
            }
        );
        let target = engine.target();
        assert_eq!(
            engine.submit_guess("123456789012345678901234567890"),
            GuessResult::Lose { target }
        );
        assert_eq!(engine.phase(), Phase::Ended);
    }

    #[test]
    fn win_credits_attempts_left_after_the_winning_guess() {
        // First-try win out of six leaves five.
        let mut engine = make_engine(single_level(10, 6, 100));
        engine.start_game();
        let target = engine.target();
        let result = engine.submit_guess(&target.to_string());
        assert_eq!(
            result,
            GuessResult::Win {
                level_points: 150,
                target,
            }
        );
        assert_eq!(engine.score(), 150);
        assert_eq!(engine.attempts_left(), 5);
        assert_eq!(engine.phase(), Phase::LevelWon);
        assert!(!engine.is_active());
    }

    #[test]
    fn win_on_last_attempt_scores_base_points_only() {
        let mut engine = make_engine(single_level(10, 2, 300));
        engine.start_game();
        let miss = wrong_guess(&engine);
        engine.submit_guess(&miss);
        let target = engine.target();
        assert_eq!(
            engine.submit_guess(&target.to_string()),
            GuessResult::Win {
                level_points: 300,
                target,
            }
        );
    }

    #[test]
    fn guesses_after_win_are_ignored_until_advance() {
        let mut engine = make_engine(vec![
            LevelConfig::new(1, 10, 5, 100),
            LevelConfig::new(2, 10, 5, 100),
        ]);
        engine.start_game();
        let target = engine.target();
        engine.submit_guess(&target.to_string());

        assert_eq!(engine.submit_guess("1"), GuessResult::Ignored);
        assert_eq!(engine.attempts_left(), 4);
        assert_eq!(engine.score(), 140);
    }

    #[test]
    fn lose_exactly_when_attempts_run_out() {
        let mut engine = make_engine(single_level(10, 3, 100));
        engine.start_game();
        let miss = wrong_guess(&engine);

        assert!(matches!(
            engine.submit_guess(&miss),
            GuessResult::Hint { attempts_left: 2, .. }
        ));
        assert!(matches!(
            engine.submit_guess(&miss),
            GuessResult::Hint { attempts_left: 1, .. }
        ));
        let target = engine.target();
        assert_eq!(engine.submit_guess(&miss), GuessResult::Lose { target });
        assert_eq!(engine.attempts_left(), 0);
        assert_eq!(engine.phase(), Phase::Ended);
        assert_eq!(
            engine.outcome(),
            Some(GameOutcome {
                victory: false,
                final_score: 0,
            })
        );

        assert_eq!(engine.submit_guess(&miss), GuessResult::Ignored);
        assert_eq!(engine.attempts_left(), 0);
    }

    #[test]
    fn loss_keeps_points_from_cleared_levels() {
        let mut engine = make_engine(vec![
            LevelConfig::new(1, 10, 5, 100),
            LevelConfig::new(2, 50, 1, 200),
        ]);
        engine.start_game();
        let target = engine.target();
        engine.submit_guess(&target.to_string());
        engine.advance_level().unwrap();

        let miss = wrong_guess(&engine);
        assert!(matches!(engine.submit_guess(&miss), GuessResult::Lose { .. }));
        assert_eq!(
            engine.outcome(),
            Some(GameOutcome {
                victory: false,
                final_score: 140,
            })
        );
    }

    #[test]
    fn advance_without_win_is_rejected() {
        let mut engine = make_engine(single_level(10, 5, 100));
        assert!(matches!(
            engine.advance_level(),
            Err(EngineError::NotAwaitingAdvance {
                phase: Phase::NotStarted
            })
        ));

        engine.start_game();
        let attempts = engine.attempts_left();
        assert!(matches!(
            engine.advance_level(),
            Err(EngineError::NotAwaitingAdvance {
                phase: Phase::LevelActive
            })
        ));
        assert_eq!(engine.phase(), Phase::LevelActive);
        assert_eq!(engine.attempts_left(), attempts);
        assert_eq!(engine.level_number(), Some(1));
    }

    #[test]
    fn winning_every_level_completes_the_game() {
        let levels = vec![
            LevelConfig::new(1, 10, 5, 100),
            LevelConfig::new(2, 50, 7, 200),
            LevelConfig::new(3, 100, 10, 300),
            LevelConfig::new(4, 200, 12, 500),
            LevelConfig::new(5, 500, 15, 1000),
        ];
        let count = levels.len();
        let mut engine = make_engine(levels);
        engine.start_game();

        let mut expected_score = 0;
        for index in 0..count {
            let level = *engine.current_level().unwrap();
            assert_eq!(level.level_number, u32::try_from(index + 1).unwrap());

            let target = engine.target();
            assert!((1..=level.max_value).contains(&target));
            let result = engine.submit_guess(&target.to_string());
            let expected_points = level.base_points + (level.max_attempts - 1) * 10;
            assert_eq!(
                result,
                GuessResult::Win {
                    level_points: expected_points,
                    target,
                }
            );
            expected_score += expected_points;

            let event = engine.advance_level().unwrap();
            if index + 1 < count {
                assert!(matches!(event, GameEvent::LevelStarted { .. }));
            } else {
                assert_eq!(
                    event,
                    GameEvent::GameCompleted {
                        final_score: expected_score,
                    }
                );
            }
        }

        assert_eq!(engine.phase(), Phase::Completed);
        assert_eq!(engine.current_level(), None);
        assert_eq!(engine.level_number(), None);
        assert_eq!(
            engine.outcome(),
            Some(GameOutcome {
                victory: true,
                final_score: expected_score,
            })
        );
        assert_eq!(engine.submit_guess("1"), GuessResult::Ignored);
        assert!(engine.advance_level().is_err());
    }

    #[test]
    fn restart_resets_score_and_level() {
        let mut engine = make_engine(vec![
            LevelConfig::new(1, 10, 5, 100),
            LevelConfig::new(2, 10, 5, 100),
        ]);
        engine.start_game();
        let target = engine.target();
        engine.submit_guess(&target.to_string());
        engine.advance_level().unwrap();
        assert_eq!(engine.level_number(), Some(2));

        let event = engine.start_game();
        assert!(matches!(event, GameEvent::LevelStarted { level_number: 1, .. }));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn score_never_decreases() {
        let mut engine = make_engine(vec![
            LevelConfig::new(1, 20, 4, 100),
            LevelConfig::new(2, 20, 4, 100),
            LevelConfig::new(3, 20, 4, 100),
        ]);
        engine.start_game();
        let mut last = engine.score();
        while engine.outcome().is_none() {
            let miss = wrong_guess(&engine);
            engine.submit_guess(&miss);
            assert!(engine.score() >= last);
            last = engine.score();

            if engine.is_active() {
                let target = engine.target();
                engine.submit_guess(&target.to_string());
                assert!(engine.score() >= last);
                last = engine.score();
                engine.advance_level().unwrap();
            }
        }
        assert_eq!(engine.outcome().map(|o| o.victory), Some(true));
    }

    #[test]
    fn target_draw_covers_closed_range() {
        let mut engine = make_engine(single_level(10, 5, 100));
        let mut seen = BTreeSet::new();
        for _ in 0..2000 {
            engine.start_game();
            let target = engine.target();
            assert!((1..=10).contains(&target), "target {target} out of range");
            seen.insert(target);
        }
        let expected: BTreeSet<u32> = (1..=10).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn single_value_range_always_draws_one() {
        let mut engine = make_engine(single_level(1, 1, 100));
        for _ in 0..20 {
            engine.start_game();
            assert_eq!(engine.target(), 1);
        }
    }

    #[test]
    fn seeded_engines_draw_the_same_targets() {
        let levels = single_level(1000, 5, 100);
        let mut a = LevelEngine::seeded(levels.clone(), 99).unwrap();
        let mut b = LevelEngine::seeded(levels, 99).unwrap();
        for _ in 0..10 {
            a.start_game();
            b.start_game();
            assert_eq!(a.target, b.target);
        }
    }
}
