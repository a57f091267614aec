use std::path::PathBuf;

/// Errors raised by the board, the turn controller, and move sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: column {column} is full or out of range")]
    InvalidMove { column: usize },

    #[error("no moves available on this board")]
    NoMovesAvailable,

    #[error("game is already over")]
    GameOver,

    #[error("move source has no more input")]
    InputClosed,
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
