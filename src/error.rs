use std::path::PathBuf;

use crate::game::{MoveError, Player};

/// Errors raised when a persisted snapshot does not describe a reachable
/// position.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("column {column} height {height} is outside [{min}, {max}]")]
    HeightOutOfRange {
        column: usize,
        height: u8,
        min: u8,
        max: u8,
    },

    #[error("both players occupy cells {0:#x}")]
    OverlappingDiscs(u64),

    #[error("bits {0:#x} lie outside the playable board")]
    StrayBits(u64),

    #[error("discs in column {column} do not fill it from the bottom up to its height")]
    FloatingDisc { column: usize },

    #[error("turn {turn} does not match {discs} discs on the board")]
    TurnMismatch { turn: u32, discs: u32 },

    #[error("red has {red} discs and blue has {blue}")]
    DiscImbalance { red: u32, blue: u32 },

    #[error("{winner} already won but play continued")]
    PlayAfterWin { winner: Player },

    #[error("history is inconsistent with the board: {0}")]
    History(String),

    #[error("failed to parse snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the command layer that drives a game.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Malformed(String),

    #[error("it is {expected}'s turn, not {requested}'s")]
    OutOfTurn { expected: Player, requested: Player },

    #[error("a game is still in progress")]
    GameInProgress,

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors reading or writing the saved game file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read game file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write game file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("game file {path} is malformed: {source}")]
    Snapshot { path: PathBuf, source: StateError },
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
