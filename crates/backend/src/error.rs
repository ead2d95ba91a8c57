//! Errors surfaced by the backend client.

use thiserror::Error;

/// Errors that can occur when talking to the hosted backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The service key could not be used as an HTTP header value.
    #[error("Invalid backend credentials: {0}")]
    InvalidKey(String),

    /// A write expected the created row back and got an empty
    /// representation.
    #[error("backend returned no rows where one was expected")]
    EmptyRepresentation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = BackendError::Api {
            status: 409,
            message: "duplicate key value violates unique constraint".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error: 409 - duplicate key value violates unique constraint"
        );
    }
}
