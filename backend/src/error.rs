//! Error types for the Leadbloom confirmation pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ContentError`] - email copy generation errors
//! - [`DeliveryError`] - mail provider errors
//! - [`NotifyError`] - the whole generate-and-send pipeline
//! - [`ServerError`] - HTTP layer errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. The pipeline wrappers
//! are transparent so an HTTP error body carries the provider-level
//! message rather than a chain of prefixes.

use thiserror::Error;

// =============================================================================
// Content Generation Errors
// =============================================================================

/// Errors from the copy generation client.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Missing API key.
    #[error("Missing OPENAI_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The provider rejected the request.
    #[error("Completion API error: {0}")]
    ApiError(String),

    /// Response body did not parse.
    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),

    /// The completion carried no choices to read.
    #[error("Completion contained no choices")]
    NoChoices,
}

// =============================================================================
// Delivery Errors
// =============================================================================

/// Errors from the mail delivery client.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Missing API key.
    #[error("Missing RESEND_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The provider rejected the send.
    #[error("Mail API error: {0}")]
    ApiError(String),

    /// Response body did not parse.
    #[error("Invalid delivery response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Notification Errors (pipeline level)
// =============================================================================

/// Errors from the generate-and-send pipeline.
///
/// This is the main error type returned by
/// [`crate::mailer::deliver_confirmation`].
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Copy generation failed; nothing was sent.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Copy was generated but delivery failed.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Notification pipeline error.
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for copy generation.
pub type ContentResult<T> = Result<T, ContentError>;

/// Result type for mail delivery.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Result type for the notification pipeline.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ContentError -> NotifyError
        let content_err = ContentError::NoChoices;
        let notify_err: NotifyError = content_err.into();
        assert!(notify_err.to_string().contains("no choices"));

        // DeliveryError -> NotifyError -> ServerError
        let delivery_err = DeliveryError::ApiError("rate limited".into());
        let notify_err: NotifyError = delivery_err.into();
        let server_err: ServerError = notify_err.into();
        assert!(server_err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_transparent_wrapping_keeps_the_message() {
        let err = ContentError::ApiError("Rate limit reached".into());
        let wrapped: ServerError = NotifyError::from(err).into();
        assert_eq!(wrapped.to_string(), "Completion API error: Rate limit reached");
    }

    #[test]
    fn test_bad_request_format() {
        let err = ServerError::BadRequest("Missing required field: email".into());
        let msg = err.to_string();
        assert!(msg.contains("Invalid request"));
        assert!(msg.contains("email"));
    }
}
