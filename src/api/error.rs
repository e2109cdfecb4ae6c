//! Gateway Error Types
//!
//! The client distinguishes a single failure kind: the server could not be
//! reached or gave an unusable answer. The variants only carry detail for
//! the logs; users always see [`CONNECTIVITY_MESSAGE`].

use thiserror::Error;

/// The one message shown to users when a call fails
pub const CONNECTIVITY_MESSAGE: &str =
    "Could not connect to the Choreboard server. Please check that it is running and reload.";

/// Connectivity or response failure
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request never completed (DNS, refused connection, timeout, ...)
    #[error("Network error calling {path}: {message}")]
    Network { path: String, message: String },

    /// Server answered with a non-success status
    #[error("Server returned {status} for {path}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// Body was not the expected JSON document
    #[error("Invalid response from {path}: {message}")]
    Decode { path: String, message: String },

    /// Request body could not be encoded
    #[error("Failed to encode request for {path}: {message}")]
    Encode { path: String, message: String },

    /// HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl GatewayError {
    /// Text suitable for the user-facing error screen
    pub fn user_message(&self) -> &'static str {
        CONNECTIVITY_MESSAGE
    }

    pub fn path(&self) -> &str {
        match self {
            GatewayError::Network { path, .. }
            | GatewayError::Status { path, .. }
            | GatewayError::Decode { path, .. }
            | GatewayError::Encode { path, .. } => path,
            GatewayError::Client(_) => "",
        }
    }
}

/// Result type for gateway calls
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Status {
            path: "/api/state".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 500 for /api/state: boom");
        assert_eq!(err.path(), "/api/state");
    }

    #[test]
    fn test_every_kind_shows_same_message() {
        let errors = [
            GatewayError::Network {
                path: "/api/state".to_string(),
                message: "refused".to_string(),
            },
            GatewayError::Decode {
                path: "/api/log_chore".to_string(),
                message: "expected value".to_string(),
            },
        ];
        for err in errors {
            assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
        }
    }
}
