//! Text rendering of engine events and the leaderboard.
//!
//! Pure formatting only; the session decides when to print.

use std::fmt::Write as _;

use numguess_types::{GameOutcome, GuessResult, HintDirection, ScoreEntry};

/// Banner for a freshly started level.
pub fn level_started(level_number: u32, max_value: u32, attempts: u32, score: u32) -> String {
    format!(
        "\n== Level {level_number} | Score {score} ==\n\
         Guess the number between 1 and {max_value} ({attempts} attempts)"
    )
}

/// One line of feedback for a submitted guess.
pub fn guess_result(result: &GuessResult) -> String {
    match result {
        GuessResult::InvalidInput => "Please enter a valid number.".to_owned(),
        GuessResult::Ignored => "No level in play.".to_owned(),
        GuessResult::Hint {
            direction,
            attempts_left,
        } => {
            let word = match direction {
                HintDirection::Higher => "Higher!",
                HintDirection::Lower => "Lower!",
            };
            format!("{word} ({attempts_left} {} left)", plural(*attempts_left, "attempt"))
        }
        GuessResult::Win {
            level_points,
            target,
        } => format!("Correct! The number was {target}. +{level_points} pts"),
        GuessResult::Lose { target } => format!("You lost! The number was {target}."),
    }
}

/// Title of the end-of-game screen.
pub fn game_over(outcome: &GameOutcome) -> String {
    let title = if outcome.victory {
        "Game Complete!"
    } else {
        "Game Over"
    };
    format!("\n{title} - Score: {}", outcome.final_score)
}

/// The ranked list, one entry per line.
pub fn leaderboard(entries: &[ScoreEntry]) -> String {
    let mut out = String::from("High scores:");
    if entries.is_empty() {
        out.push_str("\n  (no scores yet)");
        return out;
    }
    for (rank, entry) in (1_usize..).zip(entries) {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n  {rank}. {:<16} {:>6} pts  {}",
            entry.name, entry.score, entry.date
        );
    }
    out
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        word.to_owned()
    } else {
        format!("{word}s")
    }
}
