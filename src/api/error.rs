//! API Error Types
//!
//! Defines the error types surfaced by the HTTP client and the draft
//! validation step, and maps each of them to a user-facing notice.

use thiserror::Error;

/// Fallback notice for failures without a server-supplied message
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Errors produced by the API client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request failed to send or was rejected at the transport level
    #[error("Network error: {0}")]
    Network(String),

    /// The server reported a failure, via HTTP status or response payload
    #[error("Server error: {}", .message.as_deref().unwrap_or("unspecified"))]
    Server { message: Option<String> },

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text to show the user for this failure.
    ///
    /// Server-supplied messages pass through verbatim; transport and decode
    /// failures collapse into the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message: Some(msg) } => msg.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Result alias for API client calls
pub type ApiResult<T> = Result<T, ApiError>;

/// A draft failed a required-field check; no request is made
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was empty after trimming
    #[error("Title is required")]
    EmptyTitle,

    /// Content was empty after trimming
    #[error("Content is required")]
    EmptyContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_passes_through() {
        let err = ApiError::Server {
            message: Some("Title already taken".to_string()),
        };
        assert_eq!(err.user_message(), "Title already taken");
    }

    #[test]
    fn test_other_failures_collapse_to_generic_notice() {
        assert_eq!(
            ApiError::Network("timeout".to_string()).user_message(),
            GENERIC_FAILURE
        );
        assert_eq!(
            ApiError::Server { message: None }.user_message(),
            GENERIC_FAILURE
        );
        assert_eq!(
            ApiError::Parse("bad json".to_string()).user_message(),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn test_validation_messages_name_the_field() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Title is required");
        assert_eq!(
            ValidationError::EmptyContent.to_string(),
            "Content is required"
        );
    }
}
