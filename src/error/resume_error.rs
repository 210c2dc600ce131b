//! Unified error type for the resume client.

use thiserror::Error;

use super::network::{ProtocolError, TransportError};
use super::validation::ValidationError;

/// Every failure the client can report, grouped by where it arose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeError {
    /// Rejected locally before any request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl ResumeError {
    /// Status recorded for this error: 400 for local validation, 0 when no
    /// response arrived, otherwise the HTTP status.
    pub fn status(&self) -> u16 {
        match self {
            ResumeError::Validation(_) => 400,
            ResumeError::Transport(_) => 0,
            ResumeError::Protocol(err) => err.status(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ResumeError::Validation(err) => err.error_code(),
            ResumeError::Transport(err) => err.error_code(),
            ResumeError::Protocol(err) => err.error_code(),
        }
    }
}
