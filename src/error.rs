use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a game. Once a `Game` exists, nothing fails.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word bank is empty, nothing to spawn")]
    EmptyBank,

    #[error("word {0:?} contains characters that cannot be typed")]
    InvalidWord(String),

    #[error("word list {} is unavailable: {source}", path.display())]
    BankUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no built-in word list named {0:?}")]
    UnknownLanguage(String),

    #[error("built-in word list {name:?} is malformed: {source}")]
    MalformedLanguage {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type GameResult<T> = Result<T, GameError>;
