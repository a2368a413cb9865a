//! Error types for the MotionRepo API client.
//!
//! # Design
//! Remote failures split into two families. `Http` means the service answered
//! with a non-2xx status. `Transport`, `Timeout` and `Deserialization` mean no
//! usable response arrived at all. The facade treats both families the same
//! when deciding whether to fall back to sample data.
//!
//! A missing record is not an error here: the facade reports it as an
//! `ApiResponse` with `success: false`.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by the request builder, the transport and the facade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The remote service returned a non-2xx status.
    #[error("HTTP error! status: {status} {reason}")]
    Http { status: u16, reason: String },

    /// The request could not be sent or the response could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The configured request timeout elapsed before a response arrived.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body was not the expected JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// An environment variable held a value that could not be parsed.
    #[error("invalid configuration in {var}: {message}")]
    Config { var: String, message: String },
}

impl ApiError {
    /// True for failures where no usable response was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_) | ApiError::Timeout(_) | ApiError::Deserialization(_)
        )
    }

    /// Status code of an `Http` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
