use std::path::PathBuf;

use crate::game::{Phase, Player};

/// A rejected `place` or `move`. The game state is untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAction {
    #[error("the game is over")]
    GameOver,

    #[error("not allowed outside the {expected:?} phase")]
    WrongPhase { expected: Phase },

    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("no piece at ({row}, {col})")]
    EmptySource { row: usize, col: usize },

    #[error("out of turn: expected {expected:?}, got {got:?}")]
    OutOfTurn {
        expected: Option<Player>,
        got: Player,
    },

    #[error("{to:?} is not adjacent to {from:?}")]
    NotAdjacent {
        from: (usize, usize),
        to: (usize, usize),
    },
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
