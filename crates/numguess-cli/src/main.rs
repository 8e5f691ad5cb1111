//! Terminal front-end for the numguess game.
//!
//! Wires the level engine and the file-backed leaderboard to stdin/stdout.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, to stderr)
//! 2. Load configuration from `--config <path>`, else `numguess.yaml` if
//!    present, else defaults
//! 3. Build the level engine (seeded if configured)
//! 4. Open the leaderboard under the configured data directory
//! 5. Run the interactive session

mod error;
mod render;
mod session;

use std::path::{Path, PathBuf};
use std::time::Duration;

use numguess_core::{GameConfig, LeaderboardConfig, LevelEngine};
use numguess_leaderboard::{FileStore, Leaderboard, LeaderboardSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::session::Session;

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "numguess.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the terminal fails.
fn main() -> Result<(), CliError> {
    // Logs go to stderr at `warn` unless RUST_LOG says otherwise, so they do
    // not interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config_path = parse_args(std::env::args().skip(1))?;
    let config = load_config(config_path.as_deref())?;
    info!(
        levels = config.levels.len(),
        seeded = config.seed.is_some(),
        data_dir = %config.leaderboard.data_dir.display(),
        "configuration loaded"
    );

    let engine = match config.seed {
        Some(seed) => LevelEngine::seeded(config.levels, seed)?,
        None => LevelEngine::new(config.levels)?,
    };

    let store = FileStore::new(&config.leaderboard.data_dir);
    let leaderboard = Leaderboard::with_settings(store, leaderboard_settings(&config.leaderboard));

    let mut session = Session::new(
        engine,
        leaderboard,
        Duration::from_millis(config.advance_delay_ms),
    );
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    session.run(&mut input, &mut output)?;

    info!("session finished");
    Ok(())
}

/// Extract the optional `--config <path>` argument.
fn parse_args<I>(mut args: I) -> Result<Option<PathBuf>, CliError>
where
    I: Iterator<Item = String>,
{
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args.next().ok_or_else(|| CliError::Usage {
                    message: format!("{arg} requires a path"),
                })?;
                config = Some(PathBuf::from(path));
            }
            other => {
                return Err(CliError::Usage {
                    message: format!("unexpected argument: {other}"),
                });
            }
        }
    }
    Ok(config)
}

/// Load configuration from an explicit path, the default file, or defaults.
fn load_config(explicit: Option<&Path>) -> Result<GameConfig, CliError> {
    if let Some(path) = explicit {
        return Ok(GameConfig::from_file(path)?);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        Ok(GameConfig::from_file(default_path)?)
    } else {
        info!("config file not found, using defaults");
        let mut config = GameConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}

fn leaderboard_settings(config: &LeaderboardConfig) -> LeaderboardSettings {
    LeaderboardSettings {
        key: config.key.clone(),
        capacity: config.capacity,
        anonymous_name: config.anonymous_name.clone(),
    }
}
