//! Explorer error types.

use bulbwonder_core::ConfigError;
use thiserror::Error;

use crate::ParamDelta;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0} rejected: parameter is already at its bound")]
    AtBound(ParamDelta),

    #[error("{parameter} {value} is outside the explorer's bounds")]
    OutOfBounds { parameter: &'static str, value: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Background field computation panicked")]
    WorkerPanicked,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize session: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed share token: {0}")]
    Token(String),

    #[error("Unsupported session version {found} (current: {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Unknown explorer configuration '{0}'")]
    UnknownExplorer(String),

    #[error("Persisted session is invalid: {0}")]
    Session(#[from] SessionError),
}
