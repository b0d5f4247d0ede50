//! Error types for the Jira client

use thiserror::Error;
use timelog_core::TrackerError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Jira client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if the credentials were rejected or lack permission
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Message without the status prefix
    fn message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            Self::RequestFailed(e) => e.to_string(),
            Self::ParseError(message) | Self::InvalidRequest(message) => message.clone(),
        }
    }
}

impl From<ClientError> for TrackerError {
    fn from(err: ClientError) -> Self {
        let message = err.message();
        if err.is_not_found() {
            TrackerError::NotFound(message)
        } else if err.is_unauthorized() {
            TrackerError::Unauthorized(message)
        } else if err.is_client_error() || matches!(err, ClientError::InvalidRequest(_)) {
            TrackerError::Rejected(message)
        } else if matches!(err, ClientError::ParseError(_)) {
            TrackerError::InvalidResponse(message)
        } else {
            TrackerError::Unavailable(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ClientError::api_error(404, "gone").is_not_found());
        assert!(ClientError::api_error(401, "nope").is_unauthorized());
        assert!(ClientError::api_error(403, "nope").is_unauthorized());
        assert!(ClientError::api_error(400, "bad").is_client_error());
        assert!(!ClientError::api_error(502, "down").is_client_error());
    }

    #[test]
    fn test_tracker_error_mapping() {
        assert_eq!(
            TrackerError::from(ClientError::api_error(404, "Issue Does Not Exist")),
            TrackerError::NotFound("Issue Does Not Exist".to_string())
        );
        assert_eq!(
            TrackerError::from(ClientError::api_error(403, "Forbidden")),
            TrackerError::Unauthorized("Forbidden".to_string())
        );
        assert_eq!(
            TrackerError::from(ClientError::api_error(
                400,
                "timeLogged: Invalid time duration entered."
            )),
            TrackerError::Rejected("timeLogged: Invalid time duration entered.".to_string())
        );
        assert_eq!(
            TrackerError::from(ClientError::api_error(503, "Service Unavailable")),
            TrackerError::Unavailable("Service Unavailable".to_string())
        );
        assert_eq!(
            TrackerError::from(ClientError::ParseError("missing field `key`".to_string())),
            TrackerError::InvalidResponse("missing field `key`".to_string())
        );
    }
}
