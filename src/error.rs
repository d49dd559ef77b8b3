//! Error types for the interactive menu

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for menu operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the interactive menu
///
/// Bad user input never surfaces here; it is answered by re-prompting.
/// What remains are failures of the collaborators around the core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Menu definition error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
