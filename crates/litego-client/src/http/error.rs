/*
[INPUT]:  Error sources (HTTP transport, serialization, auth, WebSocket)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Litego client
#[derive(Error, Debug)]
pub enum LitegoError {
    /// HTTP request failed before a status code was obtained
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication fallback exhausted, session cannot proceed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// WebSocket subscription error
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connect or receive wait expired
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },
}

impl LitegoError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LitegoError::Http(_)
                | LitegoError::Timeout { .. }
                | LitegoError::WebSocket(_)
                | LitegoError::InvalidResponse(_)
        )
    }

    /// Check if error indicates an unrecoverable authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, LitegoError::Authentication { .. })
    }
}

/// Result type alias for Litego operations
pub type Result<T> = std::result::Result<T, LitegoError>;
