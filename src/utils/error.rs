//! Error handling for sheet loading
//!
//! This module provides the error types for retrieval and decoding. Formatting
//! never fails, so nothing here is raised by the text pipeline.

use thiserror::Error;

/// A single retrieval attempt failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or client failure before a response arrived
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The structured body was not wrapped in a callback invocation
    #[error("malformed callback body: {0}")]
    MalformedBody(String),

    /// The body invoked a callback that is not registered
    #[error("response invoked unknown callback '{0}'")]
    UnknownCallback(String),

    /// The registered callback was never invoked
    #[error("callback '{0}' was never invoked")]
    NotInvoked(String),

    /// The structured payload could not be decoded
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Which retrieval channel failed
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Delimited-text export failed
    #[error("primary retrieval failed: {0}")]
    Primary(#[source] FetchError),

    /// Structured fallback failed
    #[error("secondary retrieval failed: {0}")]
    Secondary(#[source] FetchError),
}

impl RetrievalError {
    /// The underlying attempt error
    pub fn cause(&self) -> &FetchError {
        match self {
            RetrievalError::Primary(err) | RetrievalError::Secondary(err) => err,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, RetrievalError::Primary(_))
    }
}

/// Crate-level error for operations that read or decode whole inputs
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("invalid structured input: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Result type for sheet operations
pub type SheetResult<T> = Result<T, SheetError>;
