//! API error taxonomy.
//!
//! Every fetcher returns `Result<T, ApiError>`. Validation failures never
//! produce an `ApiError` because they are checked before any network call;
//! see [`crate::session::AuthError`] and [`crate::checkout`] for the
//! form-level errors.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the marketplace API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied error text, or the raw body when unstructured.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A mutating call was attempted without a session token.
    ///
    /// This is a precondition failure reported to the caller, never a
    /// silent no-op.
    #[error("not authenticated: no session token")]
    NotAuthenticated,
}

impl ApiError {
    /// The HTTP status of an `Api` error, if that is what this is.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape returned by the API.
///
/// Different endpoints use `message` or `errorMessage`; both are read.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

impl ErrorBody {
    /// Extract the most useful error text from a raw response body.
    pub(crate) fn extract(body: &str) -> String {
        let parsed: Self = serde_json::from_str(body).unwrap_or_default();
        parsed
            .message
            .or(parsed.error_message)
            .unwrap_or_else(|| body.chars().take(200).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message_field() {
        assert_eq!(
            ErrorBody::extract(r#"{"message":"Invalid credentials"}"#),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_error_body_error_message_field() {
        assert_eq!(
            ErrorBody::extract(r#"{"errorMessage":"Item already in cart"}"#),
            "Item already in cart"
        );
    }

    #[test]
    fn test_error_body_unstructured_falls_back_to_raw() {
        assert_eq!(ErrorBody::extract("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 409,
            message: "already flagged".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 409 - already flagged");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_not_authenticated_has_no_status() {
        assert_eq!(ApiError::NotAuthenticated.status(), None);
    }
}
