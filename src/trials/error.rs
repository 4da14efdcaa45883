use thiserror::Error;

use crate::game::{GameBuilderError, GameError};

/// Errors that can occur while running trial batches
#[derive(Debug, Error)]
pub enum TrialError {
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[error("Building a game failed: {0}")]
    Build(#[from] GameBuilderError),

    #[error("Playing a game failed: {0}")]
    Play(#[from] GameError),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for trial operations
pub type Result<T> = std::result::Result<T, TrialError>;
