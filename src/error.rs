//! Error types for the pursuit crate

use thiserror::Error;

/// Main error type for the pursuit crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal actions for agent {agent} at the search root")]
    NoLegalActions { agent: usize },

    #[error("discount factor {value} must lie in [0, 1)")]
    InvalidDiscount { value: f64 },

    #[error("search depth {rounds} must be at least one round")]
    InvalidDepth { rounds: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
