use std::fmt;

use thiserror::Error;

/// Failure of a single API round-trip. Carried back to the session loop and
/// mapped to user-visible notices (or silent logs) per call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// Request never reached the server or never returned.
    Network,
    Timeout,
    /// Server answered outside the 2xx range.
    HttpStatus(u16),
    /// Response body could not be parsed as the expected shape.
    MalformedBody,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Network => write!(f, "network error"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailure::MalformedBody => write!(f, "malformed body"),
        }
    }
}
