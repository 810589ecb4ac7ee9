// src/error.rs
//! Client error types with structured error handling.
//!
//! The taxonomy is deliberately small: local validation failures happen
//! before any network call, remote failures carry the service's own error
//! envelope, and unknown wire variants are never errors at all — they
//! normalize to `Unsupported` markers instead.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`,
/// the domain vocabulary is encoded in the type system. Each variant
/// tells you exactly what the Notion API reported and enables
/// pattern-based handling without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded. Backing off is the caller's job; this
    /// client never retries
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether this error is transient and worth retrying upstream.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main client error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The Notion service returned its error envelope. Detected while
    /// parsing a response; never retried by this layer.
    #[error("Notion API returned an error ({code}): {message}")]
    NotionApi {
        code: NotionErrorCode,
        message: String,
    },

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    /// Timeout and retry policy belong to the transport, not here.
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// A success-shaped response body that doesn't decode against the
    /// wire schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A URL payload (link-preview mention) that cannot be parsed even
    /// relative to the Notion origin. Decorative hrefs never produce this;
    /// they degrade to absent instead.
    #[error("Invalid URL: {0}")]
    MalformedUrl(String),

    /// Local validation failure, always detected before any network call.
    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl Error {
    /// Build a `NotionApi` error from the service's raw code and message.
    pub(crate) fn from_api_error(code: &str, message: String) -> Self {
        Error::NotionApi {
            code: NotionErrorCode::from_api_response(code),
            message,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_vocabulary_round_trips() {
        let code = NotionErrorCode::from_api_response("object_not_found");
        assert_eq!(code, NotionErrorCode::ObjectNotFound);
        assert!(code.is_not_found());
        assert!(!code.is_retryable());
        assert_eq!(code.to_string(), "object_not_found");
    }

    #[test]
    fn unknown_codes_pass_through() {
        let code = NotionErrorCode::from_api_response("brand_new_failure");
        assert_eq!(
            code,
            NotionErrorCode::Unknown("brand_new_failure".to_string())
        );
        assert_eq!(code.to_string(), "brand_new_failure");
    }
}
