//! HTTP response types for the StockX API client.

use std::collections::HashMap;

use crate::clients::errors::DecodeError;

/// An HTTP response with its body kept as raw bytes.
///
/// The body is decoded lazily with [`HttpResponse::json`] so a non-JSON
/// body (typically a bot-protection HTML page) can still be logged.
/// Bytes are never rewritten before decoding; invalid UTF-8 fails the decode.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid UTF-8 JSON.
    pub fn json(&self) -> Result<serde_json::Value, DecodeError> {
        serde_json::from_slice(&self.body).map_err(|e| DecodeError {
            code: self.code,
            content_type: self.content_type().unwrap_or("unknown").to_string(),
            message: e.to_string(),
        })
    }

    /// Returns at most `max_chars` characters of the body, for logging.
    ///
    /// Invalid UTF-8 sequences are shown as U+FFFD.
    #[must_use]
    pub fn body_preview(&self, max_chars: usize) -> String {
        String::from_utf8_lossy(&self.body)
            .chars()
            .take(max_chars)
            .collect()
    }
}
