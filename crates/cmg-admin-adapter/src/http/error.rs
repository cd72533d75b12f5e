/*
[INPUT]:  Error sources (HTTP, API status codes, serialization, session state)
[OUTPUT]: Structured error types with operator-facing messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ErrorBody;

/// Main error type for the admin adapter
#[derive(Error, Debug)]
pub enum AdminError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Credentials were rejected or the response lacked tokens
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Authenticated but not allowed (e.g. not a superuser)
    #[error("Access denied: {message}")]
    Forbidden { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Request body rejected by server-side validation
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Access token expired (server answered 409)
    #[error("Access token expired")]
    TokenExpired,

    /// Token refresh failed; the stored session has been cleared
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Session file could not be read or written
    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    /// Check if error means the operator has to authenticate again
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            AdminError::Authentication { .. } | AdminError::TokenExpired | AdminError::SessionExpired
        )
    }

    /// Build an error from a non-success status and the raw response body
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string()
            });

        match status {
            StatusCode::UNAUTHORIZED => AdminError::Authentication { message },
            StatusCode::FORBIDDEN => AdminError::Forbidden { message },
            StatusCode::NOT_FOUND => AdminError::NotFound { message },
            StatusCode::CONFLICT => AdminError::TokenExpired,
            StatusCode::UNPROCESSABLE_ENTITY => AdminError::Validation { message },
            _ => AdminError::Api {
                code: status.as_u16(),
                message,
            },
        }
    }

    /// Short text suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Authentication { message }
            | AdminError::Forbidden { message }
            | AdminError::NotFound { message }
            | AdminError::Validation { message }
            | AdminError::Api { message, .. } => message.clone(),
            AdminError::Http(err) if err.is_timeout() => {
                "The server did not respond in time. Please try again later.".to_string()
            }
            AdminError::Http(err) if err.is_connect() => {
                "Could not reach the server. Please try again later.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(AdminError::TokenExpired.is_auth_error());
        assert!(AdminError::SessionExpired.is_auth_error());
        assert!(!AdminError::Config("x".into()).is_auth_error());
    }

    #[test]
    fn test_from_status_uses_detail() {
        let err = AdminError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"detail": "Category not found"}"#,
        );
        match err {
            AdminError::NotFound { message } => assert_eq!(message, "Category not found"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_from_status_falls_back_to_reason() {
        let err = AdminError::from_status(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        match err {
            AdminError::Api { code, message } => {
                assert_eq!(code, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("Expected Api error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_conflict_maps_to_token_expired() {
        let err = AdminError::from_status(StatusCode::CONFLICT, r#"{"detail": "Token has expired"}"#);
        assert!(matches!(err, AdminError::TokenExpired));
    }
}
