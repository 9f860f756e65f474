//! Error taxonomy for admin API calls

use thiserror::Error;

/// Result alias used by all client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of an admin API operation
///
/// Every variant is reported to the user the same way (an error alert with
/// [`ApiError::user_message`]); the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent, timed out, or its body could not be read
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered with `status: false` or a non-2xx status
    #[error("rejected by server ({status_code}): {message}")]
    Rejected { status_code: u16, message: String },

    /// A lookup by id found nothing
    #[error("not found: {0}")]
    NotFound(String),

    /// A required field was empty, detected before any request was made
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backend reported success but the payload was missing or malformed
    #[error("unexpected response: {0}")]
    Decode(String),

    /// No bearer token is available
    #[error("not signed in")]
    Unauthenticated,
}

impl ApiError {
    /// Human-readable message suitable for an alert body
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            Self::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { status_code, .. } => {
                format!("The server rejected the request (HTTP {status_code}).")
            }
            Self::NotFound(what) => format!("{what} could not be found."),
            Self::Validation(message) => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
            Self::Unauthenticated => "You are not signed in. Please log in again.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_passed_through() {
        let err = ApiError::Rejected {
            status_code: 200,
            message: "already seen".to_string(),
        };
        assert_eq!(err.user_message(), "already seen");
    }

    #[test]
    fn test_rejected_without_message_mentions_status() {
        let err = ApiError::Rejected {
            status_code: 500,
            message: "  ".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "The server rejected the request (HTTP 500)."
        );
    }

    #[test]
    fn test_raw_network_detail_is_not_shown() {
        let err = ApiError::Network("tcp connect error: os error 111".to_string());
        assert!(!err.user_message().contains("os error"));
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::NotFound("Amenity 42".to_string());
        assert_eq!(err.user_message(), "Amenity 42 could not be found.");
    }
}
