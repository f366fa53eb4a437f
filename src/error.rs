use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid token {token:?} at position {token_index}: {reason}")]
    Parse {
        token_index: usize,
        token: String,
        reason: String,
    },

    #[error("expected a multiple of 25 numbers for the boards, found {token_count}")]
    IncompleteBoard { token_count: usize },

    #[error("no board won after {draws} draws across {boards} boards")]
    NoWinner { boards: usize, draws: usize },

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl BingoError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => BingoError::NotFound { path },
            _ => BingoError::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, BingoError>;
