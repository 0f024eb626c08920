use std::path::PathBuf;

use crate::game::GameStatus;

/// Errors raised by the board itself: construction and low-level cell access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: both must be > 0")]
    InvalidDimensions { width: usize, height: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("cell ({row}, {column}) is outside the board")]
    OutOfRange { row: usize, column: usize },

    #[error("column {column} has no empty cell at the requested row")]
    ColumnFull { column: usize },
}

/// Errors returned when a drop request is rejected. None of them change the
/// game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over ({status})")]
    GameOver { status: GameStatus },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
