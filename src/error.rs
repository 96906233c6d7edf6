// Error handling for the player adapter layer

use std::fmt;

/// Player error types
#[derive(Debug, Clone)]
pub enum PlayerError {
    /// Failed to build the wrapped engine
    Initialization(String),

    /// Playback error reported by the engine
    Playback(String),

    /// Operation not valid in the current engine state
    InvalidState(String),

    /// Generic error
    Other(String),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerError::Initialization(msg) => write!(f, "Initialization error: {}", msg),
            PlayerError::Playback(msg) => write!(f, "Playback error: {}", msg),
            PlayerError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            PlayerError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PlayerError {}

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
