//! Error types for e-Shoku.

use std::fmt;

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum EshokuError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for e-Shoku operations.
pub type EshokuResult<T> = Result<T, EshokuError>;

/// Why a room lookup ended up as "not found".
///
/// Both causes look the same to the end user (a 404 page), but callers
/// can still tell whether the room service was ever asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundCause {
    /// The id did not have the canonical UUID layout; no request was made.
    MalformedIdentifier,
    /// The room service answered 404.
    Remote,
}

impl fmt::Display for NotFoundCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundCause::MalformedIdentifier => write!(f, "malformed identifier"),
            NotFoundCause::Remote => write!(f, "remote 404"),
        }
    }
}

/// Classified outcome of a failed room lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Room not found")]
    NotFound(NotFoundCause),

    #[error("Room service answered with status {0}")]
    RemoteError(u16),

    #[error("Room service request failed: {0}")]
    ServerError(#[source] reqwest::Error),
}

impl LookupError {
    /// HTTP status the room page should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            LookupError::NotFound(_) => 404,
            LookupError::RemoteError(code) => *code,
            LookupError::ServerError(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}
