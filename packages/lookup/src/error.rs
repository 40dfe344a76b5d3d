//! Error types for the lookup service.
//!
//! Every variant falls into one of a few coarse kinds (see [`ErrorKind`]),
//! which is what the HTTP layer maps onto status codes.

use thiserror::Error;

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed caller input. Never retried.
    Validation,
    /// The upstream source has no matching record.
    NotFound,
    /// Transport failure, unexpected status or unparseable payload.
    Upstream,
    /// Invalid startup configuration.
    Config,
}

/// Main error type for the lookup service.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Identifier is not exactly 10 ASCII digits.
    #[error("Invalid identifier: '{0}'. Expected exactly 10 digits")]
    InvalidIdentifier(String),

    /// Request body is malformed or misses required fields.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No record for the requested key.
    #[error("Record not found")]
    NotFound,

    /// HTTP request to the upstream failed (connect, timeout, body read).
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with something other than 200.
    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream payload did not have the expected shape.
    #[error("Failed to parse upstream response: {0}")]
    UpstreamParse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIdentifier(_) | Self::InvalidRequest(_) => ErrorKind::Validation,
            Self::NotFound => ErrorKind::NotFound,
            Self::Http(_) | Self::UpstreamStatus { .. } | Self::UpstreamParse(_) => {
                ErrorKind::Upstream
            }
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
