//! Error types for Pewn API operations.

use thiserror::Error;

/// Errors that can occur during Pewn API operations.
#[derive(Debug, Error)]
pub enum PewnError {
    /// The request path fragment is empty or starts/ends with a separator.
    #[error("Invalid request path '{0}': must be non-empty and must not start or end with '/'")]
    InvalidPath(String),

    /// The configured host is not a valid absolute URL.
    #[error("Invalid host '{0}'")]
    InvalidHost(String),

    /// Configuration is missing or incomplete.
    #[error("Pewn configuration required: {0}")]
    ConfigMissing(String),

    /// Entity not found.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// API request failed.
    #[error("Pewn API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A request URL could not be assembled from already validated parts.
    ///
    /// This indicates a defect in the library rather than a runtime condition.
    #[error("Internal error while building request URL: {0}")]
    Internal(#[from] url::ParseError),
}

/// Coarse classification of a [`PewnError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an invalid argument; detected before any I/O.
    InvalidInput,
    /// A round trip to the API failed or returned something unusable.
    Request,
    /// A library defect.
    Internal,
}

impl PewnError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPath(_) | Self::InvalidHost(_) | Self::ConfigMissing(_) => {
                ErrorKind::InvalidInput
            }
            Self::NotFound { .. }
            | Self::ApiError { .. }
            | Self::HttpError(_)
            | Self::ParseError(_) => ErrorKind::Request,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns true if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::ApiError { status_code, .. } => *status_code == Some(404),
            Self::HttpError(e) => e.status().map_or(false, |s| s.as_u16() == 404),
            _ => false,
        }
    }
}

/// Result type alias for Pewn operations.
pub type Result<T> = core::result::Result<T, PewnError>;
