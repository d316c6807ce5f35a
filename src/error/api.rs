//! Errors raised by the remote image API.

use thiserror::Error;

use super::ErrorKind;
use crate::traits::HttpError;

/// Failure of one of the three remote operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, timeout, IO).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The backend rejected the request parameters (HTTP 400/422).
    #[error("request rejected: {0}")]
    Validation(String),

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Map a non-success HTTP status and body to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => ApiError::NotFound(message),
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// All remote failures are fetch failures from the controller's view.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::FetchFailure
    }

    /// Short human-readable text for the error slot.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            ApiError::Server { status, .. } => match *status {
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::Validation(message) if !message.trim().is_empty() => {
                format!("The server rejected the request: {}", message.trim())
            }
            ApiError::Validation(_) => "The server rejected the request.".to_string(),
            ApiError::NotFound(_) => "The requested resource was not found.".to_string(),
            ApiError::InvalidResponse(_) => {
                "Received an invalid response from the server.".to_string()
            }
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => ApiError::from_status(status, message),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(ApiError::from_status(404, "x"), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(400, "x"), ApiError::Validation(_)));
        assert!(matches!(ApiError::from_status(422, "x"), ApiError::Validation(_)));
        assert!(matches!(
            ApiError::from_status(503, "x"),
            ApiError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_http_error_conversion() {
        let err: ApiError = HttpError::Timeout("30s".to_string()).into();
        assert!(matches!(err, ApiError::Network(_)));

        let err: ApiError = HttpError::ServerError {
            status: 404,
            message: "no such cluster".to_string(),
        }
        .into();
        assert_eq!(err, ApiError::NotFound("no such cluster".to_string()));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::from_status(500, "trace").user_message(),
            "The server is experiencing issues. Please try again later."
        );
        assert_eq!(
            ApiError::from_status(418, "teapot").user_message(),
            "The server returned an error (HTTP 418)."
        );
        assert_eq!(
            ApiError::Validation("year must be numeric".to_string()).user_message(),
            "The server rejected the request: year must be numeric"
        );
        assert_eq!(ApiError::Validation(String::new()).user_message(), "The server rejected the request.");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = ApiError::from_status(502, "bad gateway");
        assert_eq!(err.to_string(), "server error (502): bad gateway");
    }
}
