//! Error types for the terminal front-end.
//!
//! [`CliError`] wraps every failure mode of startup and play so `main` can
//! propagate with `?`.

/// Top-level error for the `numguess` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: numguess_core::ConfigError,
    },

    /// The level engine rejected its configuration or a transition.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: numguess_core::EngineError,
    },

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The command line could not be understood.
    #[error("{message}\n\nusage: numguess [--config <path>]")]
    Usage {
        /// What was wrong with the arguments.
        message: String,
    },
}
