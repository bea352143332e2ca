//! HTTP-specific error types for the StockX API client.
//!
//! # Error Handling
//!
//! Each failure class gets its own type so callers can tell a rejected
//! query from an unreachable network:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses
//! - [`DecodeError`]: A 2xx response whose body is not valid JSON
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use stockx_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::Response(e)) => println!("Rejected with {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("Not JSON: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The message holds the start of the response body, which is where the
/// gateway and its bot protection put their explanations.
///
/// # Example
///
/// ```rust
/// use stockx_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 403,
///     message: "Access denied".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 403: Access denied");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Leading portion of the response body.
    pub message: String,
    /// Reference ID for error reporting (from `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when a successful response body is not valid JSON.
#[derive(Debug, Error)]
#[error("Failed to decode JSON response (status {code}, content type {content_type}): {message}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The `Content-Type` header, or `unknown` when absent.
    pub content_type: String,
    /// The decoder's error message.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A configured value cannot be sent as an HTTP header.
    #[error("Invalid value for header '{name}'")]
    InvalidHeader {
        /// The header whose value was rejected.
        name: &'static str,
    },

    /// Network, TLS, or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Decode(e) => Some(e.code),
            _ => None,
        }
    }
}
