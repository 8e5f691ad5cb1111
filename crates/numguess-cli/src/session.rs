//! Interactive play session: drives the level engine from line input and
//! records finished games on the leaderboard.
//!
//! The session owns all timing. After a win or loss it pauses for the
//! configured delay before showing the next screen, then calls
//! [`LevelEngine::advance_level`] itself.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use numguess_core::LevelEngine;
use numguess_leaderboard::{KeyValueStore, Leaderboard};
use numguess_types::{GameEvent, GameOutcome, GuessResult};
use rand::Rng;
use tracing::{debug, info};

use crate::error::CliError;
use crate::render;

/// How a level's guessing loop ended.
enum LevelEnd {
    Cleared,
    Lost,
    InputClosed,
}

/// A terminal play session.
pub struct Session<R, S> {
    engine: LevelEngine<R>,
    leaderboard: Leaderboard<S>,
    advance_delay: Duration,
}

impl<R: Rng, S: KeyValueStore> Session<R, S> {
    /// Create a session.
    pub const fn new(
        engine: LevelEngine<R>,
        leaderboard: Leaderboard<S>,
        advance_delay: Duration,
    ) -> Self {
        Self {
            engine,
            leaderboard,
            advance_delay,
        }
    }

    /// Play games until the player declines another or input ends.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<(), CliError> {
        writeln!(output, "{}", render::leaderboard(&self.leaderboard.load()))?;

        loop {
            let Some(outcome) = self.play_game(input, output)? else {
                writeln!(output)?;
                return Ok(());
            };
            writeln!(output, "{}", render::game_over(&outcome))?;
            writeln!(output, "{}", render::leaderboard(&self.leaderboard.load()))?;

            let Some(name) = prompt(input, output, "Your name: ")? else {
                return Ok(());
            };
            let entries = self.leaderboard.submit(&name, outcome.final_score);
            writeln!(output, "{}", render::leaderboard(&entries))?;

            let Some(answer) = prompt(input, output, "Play again? [y/N] ")? else {
                return Ok(());
            };
            if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                return Ok(());
            }
        }
    }

    /// Play one game from the first level. Returns `None` if input closed
    /// before the game finished.
    fn play_game<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<Option<GameOutcome>, CliError> {
        let mut event = self.engine.start_game();
        info!("new game");

        while let GameEvent::LevelStarted {
            level_number,
            max_value,
            attempts_allowed,
        } = event
        {
            writeln!(
                output,
                "{}",
                render::level_started(
                    level_number,
                    max_value,
                    attempts_allowed,
                    self.engine.score()
                )
            )?;

            match self.play_level(input, output)? {
                LevelEnd::Cleared => {
                    self.pause();
                    event = self.engine.advance_level()?;
                }
                LevelEnd::Lost => {
                    self.pause();
                    break;
                }
                LevelEnd::InputClosed => return Ok(None),
            }
        }

        Ok(self.engine.outcome())
    }

    /// Read guesses until the current level is cleared or lost.
    fn play_level<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<LevelEnd, CliError> {
        loop {
            let Some(line) = prompt(input, output, "> ")? else {
                return Ok(LevelEnd::InputClosed);
            };
            let result = self.engine.submit_guess(&line);
            debug!(?result, "guess evaluated");
            writeln!(output, "{}", render::guess_result(&result))?;

            match result {
                GuessResult::Win { .. } => return Ok(LevelEnd::Cleared),
                GuessResult::Lose { .. } => return Ok(LevelEnd::Lost),
                GuessResult::InvalidInput | GuessResult::Ignored | GuessResult::Hint { .. } => {}
            }
        }
    }

    fn pause(&self) {
        if !self.advance_delay.is_zero() {
            thread::sleep(self.advance_delay);
        }
    }
}

/// Print `label` and read one line. Returns `None` at end of input.
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    label: &str,
) -> Result<Option<String>, CliError> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}
