//! Error types for the PNT engine

use thiserror::Error;

/// Main error type for the PNT crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: token {token} is not legal (legal tokens: {legal:?})")]
    InvalidMove { token: u32, legal: Vec<u32> },

    #[error("token {token} is out of range (must be 1-{total})")]
    TokenOutOfRange { token: u32, total: u32 },

    #[error("token {token} has already been taken")]
    DuplicateToken { token: u32 },

    #[error("malformed input line '{line}': {reason}")]
    MalformedInput { line: String, reason: String },

    #[error("no input available at '{path}'")]
    NoInputAvailable { path: String },

    #[error("no prime factor of {token} among the legal moves")]
    DegenerateEvaluation { token: u32 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an IO error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
