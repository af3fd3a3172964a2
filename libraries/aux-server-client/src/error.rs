//! Error types for the Aux server client.

use thiserror::Error;

/// Errors that can occur when interacting with the Aux backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed at the transport layer (includes timeouts)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned an error response; `detail` is the backend's
    /// human-readable message when it sent one
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: u16,
        detail: Option<String>,
    },

    /// Authentication required but no credentials available
    #[error("Authentication required")]
    AuthRequired,

    /// Token refresh failed; credential state has been torn down
    #[error("Token refresh failed: {detail}")]
    TokenRefreshFailed {
        status: Option<u16>,
        detail: String,
    },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Credential storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] aux_core::AuxError),

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status carried by this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::TokenRefreshFailed { status, .. } => *status,
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Backend detail message carried by this error, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            Self::TokenRefreshFailed { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
