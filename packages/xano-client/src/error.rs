//! Error types for the Xano client.

use thiserror::Error;

/// Result type for Xano client operations.
pub type Result<T> = std::result::Result<T, XanoError>;

/// Xano client errors.
#[derive(Debug, Error)]
pub enum XanoError {
    /// Configuration error (missing or malformed base URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl XanoError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            XanoError::Api { status, .. } => Some(*status),
            XanoError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the request timed out in the transport.
    pub fn is_timeout(&self) -> bool {
        matches!(self, XanoError::Network(e) if e.is_timeout())
    }
}
