//! Error types for the engine binary.

use menagerie_agents::AnimalError;
use menagerie_core::ConfigError;

/// Errors that can occur while running the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("configuration error: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// Breeding the seed roster failed.
    #[error("roster error: {source}")]
    Roster {
        /// The underlying animal validation error.
        #[from]
        source: AnimalError,
    },
}
