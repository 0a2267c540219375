//! API error types for the OAP REST API client.

use std::fmt;

use thiserror::Error;

/// API-specific error type for the OAP REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Endpoint URL could not be built from the client configuration
    #[error("URL build error: {0}")]
    UrlBuild(String),

    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Network error from a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Missing or invalid API token (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(ErrorResponse),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(ErrorResponse),

    /// Invalid request parameters (400)
    #[error("Bad request: {0}")]
    BadRequest(ErrorResponse),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(ErrorResponse),

    /// Token rate limit exceeded (429)
    #[error("Rate limited: {0}")]
    RateLimited(ErrorResponse),

    /// Server-side error (5xx)
    #[error("Server error {0}: {1}")]
    ServerError(u16, ErrorResponse),

    /// Unexpected HTTP status code
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, ErrorResponse),

    /// Request body could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// HTTP status code behind this error, if it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound(_) => Some(404),
            ApiError::BadRequest(_) => Some(400),
            ApiError::Forbidden(_) => Some(403),
            ApiError::RateLimited(_) => Some(429),
            ApiError::ServerError(code, _) => Some(*code),
            ApiError::UnexpectedStatus(code, _) => Some(*code),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The decoded error body, for errors built from a non-2xx response.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            ApiError::Unauthorized(r)
            | ApiError::NotFound(r)
            | ApiError::BadRequest(r)
            | ApiError::Forbidden(r)
            | ApiError::RateLimited(r)
            | ApiError::ServerError(_, r)
            | ApiError::UnexpectedStatus(_, r) => Some(r),
            _ => None,
        }
    }

    /// Whether the remote reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Whether the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Http(_) | ApiError::Transport(_))
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A single entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ErrorDetail {
    pub error: String,
}

/// Error response format from the API.
///
/// The service answers failures with `{"error": "..."}`, and some endpoints
/// with `{"errors": [{"error": "..."}]}`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(alias = "error", default)]
    pub message: Option<String>,
    /// Additional error entries
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ErrorResponse {
    /// Wrap a raw, non-JSON error body.
    pub fn from_text(text: String) -> Self {
        Self {
            message: Some(text),
            errors: Vec::new(),
        }
    }

    /// Get the error message, falling back to the first `errors` entry.
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.errors.first().map(|e| e.error.clone()))
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_message())?;
        let skip = usize::from(self.message.is_none());
        for detail in self.errors.iter().skip(skip) {
            write!(f, "; {}", detail.error)?;
        }
        Ok(())
    }
}
