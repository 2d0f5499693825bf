//! Error types for game construction and configuration

use thiserror::Error;

/// Errors raised while building a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid playfield: width and height must be positive, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("Starting lives must be at least 1")]
    NoLives,

    #[error("No levels configured")]
    NoLevels,

    #[error("Level {0} contains no bricks")]
    EmptyLevel(usize),

    #[error("Level {index} has bricks outside the {width}x{height} playfield")]
    LevelOutOfBounds { index: usize, width: f32, height: f32 },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
