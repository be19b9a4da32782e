use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Define a convenient Result type
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("number of arguments")]
    ArgumentCount,

    #[error("unknown kind {0:?}")]
    UnknownKind(String),

    #[error("pr must be a number")]
    InvalidNumber(#[source] ParseIntError),

    #[error("stat {}: {source}", .path.display())]
    DirectoryResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("create {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the invocation itself was malformed and usage should be shown.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::ArgumentCount)
    }
}
