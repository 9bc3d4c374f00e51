//! Error types used throughout the client library

use thiserror::Error;

/// Main error type for the Sentria client.
///
/// Every call either fully succeeds with a typed result or fails with one of
/// these variants; nothing is swallowed or retried internally.
#[derive(Error, Debug)]
pub enum SentriaError {
    /// Credentials are missing or incomplete, or the public key is missing
    /// when a session-creation call requires it. Raised before any network
    /// activity.
    #[error("Authentication configuration error: {0}")]
    AuthConfiguration(String),

    /// The remote service answered with a non-success status. Carries the
    /// numeric status code and the raw response body verbatim.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),
}

impl SentriaError {
    /// Status code of the remote failure, if this is an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for Sentria client operations
pub type Result<T> = std::result::Result<T, SentriaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_and_body() {
        let err = SentriaError::Http { status: 409, body: "case already exists".to_string() };
        let rendered = err.to_string();
        assert!(rendered.contains("409"));
        assert!(rendered.contains("case already exists"));
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn non_http_errors_have_no_status() {
        let err = SentriaError::AuthConfiguration("credentials not set".to_string());
        assert_eq!(err.status(), None);
    }
}
