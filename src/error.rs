//! Error type shared by the whole crate.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("at least 2 nodes are required, got {count}")]
    TooFewNodes { count: usize },
    #[error("exhaustive search supports at most {max} nodes, got {count}")]
    TooManyNodes { count: usize, max: usize },
    #[error("node index {index} out of range for {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid usage: {0}")]
    Usage(String),
    #[error("logger init failed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("colony finished without constructing a tour")]
    NoTour,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}
