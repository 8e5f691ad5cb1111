//! Configuration loading and typed config structures for the numguess game.
//!
//! The configuration lives in `numguess.yaml`. Every field is optional; an
//! empty file (or no file at all) yields the classic five-level curve and a
//! leaderboard under `.numguess/`.

use std::path::{Path, PathBuf};

use numguess_types::LevelConfig;
use serde::Deserialize;

/// Environment variable overriding [`LeaderboardConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "NUMGUESS_DATA_DIR";

/// Environment variable overriding [`GameConfig::seed`].
pub const SEED_ENV: &str = "NUMGUESS_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// The environment variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Difficulty curve, in play order.
    #[serde(default = "default_levels")]
    pub levels: Vec<LevelConfig>,

    /// Pause between a win or loss and the next screen, in milliseconds.
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,

    /// Fixed seed for target draws. `None` draws from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Leaderboard storage settings.
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            advance_delay_ms: default_advance_delay_ms(),
            seed: None,
            leaderboard: LeaderboardConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path, then apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidEnv`] if an override is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides are
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document has no mapping to deserialize from.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Override fields from the process environment when set.
    ///
    /// - `NUMGUESS_DATA_DIR` overrides `leaderboard.data_dir`
    /// - `NUMGUESS_SEED` overrides `seed`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `NUMGUESS_SEED` is not a `u64`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Override fields from an arbitrary variable lookup.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            self.leaderboard.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw.trim().parse().map_err(|_err| ConfigError::InvalidEnv {
                name: SEED_ENV,
                value: raw.clone(),
            })?;
            self.seed = Some(seed);
        }
        Ok(())
    }
}

/// Where and how the leaderboard is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardConfig {
    /// Directory holding one JSON file per storage key.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Storage key of the leaderboard blob.
    #[serde(default = "default_key")]
    pub key: String,

    /// Number of entries kept.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Name recorded when the player leaves theirs blank.
    #[serde(default = "default_anonymous_name")]
    pub anonymous_name: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
            capacity: default_capacity(),
            anonymous_name: default_anonymous_name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

/// The classic five-level difficulty curve.
pub fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new(1, 10, 5, 100),
        LevelConfig::new(2, 50, 7, 200),
        LevelConfig::new(3, 100, 10, 300),
        LevelConfig::new(4, 200, 12, 500),
        LevelConfig::new(5, 500, 15, 1000),
    ]
}

const fn default_advance_delay_ms() -> u64 {
    2_000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".numguess")
}

fn default_key() -> String {
    "adivina_numero_scores".to_owned()
}

const fn default_capacity() -> usize {
    5
}

fn default_anonymous_name() -> String {
    "Anonymous".to_owned()
}
