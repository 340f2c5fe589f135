//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom transport failed to deliver the request.
    #[error("Transport error: {0}")]
    Transport(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request parameters could not be encoded.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The server answered 204 where a body was required.
    #[error("Empty response from {0}")]
    EmptyResponse(String),
}

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_)) || matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_)) || matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Build the error for a non-success status from the raw response body.
    pub(crate) fn from_status(status: u16, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(err) if !err.errors.is_empty() => err.errors.join("; "),
            _ => format!("HTTP {}", status),
        };

        match status {
            401 => Error::Auth(message),
            404 => Error::NotFound(message),
            _ => Error::Api { status, message },
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error response from the server.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_joins_service_errors() {
        let err = Error::from_status(400, br#"{"errors":["Invalid body","Missing to_ids"]}"#);
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid body; Missing to_ids");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_maps_auth_and_not_found() {
        let err = Error::from_status(401, br#"{"errors":["Invalid API token"]}"#);
        assert!(err.is_auth_error());
        assert_eq!(err.to_string(), "Authentication failed: Invalid API token");

        let err = Error::from_status(404, b"");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: HTTP 404");
    }

    #[test]
    fn test_status_predicates() {
        assert!(Error::from_status(429, b"not json").is_rate_limited());
        assert!(Error::from_status(503, b"").is_server_error());
        assert!(!Error::from_status(400, b"").is_server_error());
    }
}
