//! HTTP client for StockX gateway communication.
//!
//! This module provides the [`HttpClient`] type, which owns the session:
//! a reqwest client with the gateway's fixed header set and a cookie store
//! that persists across requests.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::MarketplaceConfig;

/// Web origin the gateway expects requests to come from.
pub const ORIGIN: &str = "https://stockx.com";

/// Referer sent alongside [`ORIGIN`].
pub const REFERER: &str = "https://stockx.com/";

/// Number of body characters kept in error messages and debug logs.
pub const BODY_PREVIEW_CHARS: usize = 500;

/// HTTP client holding one cookie-backed session.
///
/// Every request carries the same default headers, built once from the
/// [`MarketplaceConfig`]. Cookies set by any response are replayed on later
/// requests to matching hosts.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The cookie store is internally locked, but
/// concurrent calls interleave their cookie updates in no particular order.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if a configured value contains
    /// characters that are not allowed in a header, or
    /// [`HttpError::Network`] if the TLS backend fails to initialise.
    pub fn new(config: &MarketplaceConfig) -> Result<Self, HttpError> {
        let default_headers = Self::build_default_headers(config)?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .cookie_store(true)
            .default_headers(default_headers.clone())
            .build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    fn build_default_headers(config: &MarketplaceConfig) -> Result<HeaderMap, HttpError> {
        let entries: [(&'static str, &str, bool); 16] = [
            ("content-type", "application/json", false),
            ("x-api-key", config.api_key().as_ref(), true),
            ("apollographql-client-name", config.client_name().as_ref(), false),
            ("x-px-authorization", config.px_authorization().as_ref(), true),
            ("user-agent", config.user_agent(), false),
            ("accept", "application/json, text/plain, */*", false),
            ("accept-language", "en-US,en;q=0.9", false),
            ("accept-encoding", "gzip, deflate", false),
            ("origin", ORIGIN, false),
            ("referer", REFERER, false),
            ("connection", "keep-alive", false),
            ("sec-fetch-dest", "empty", false),
            ("sec-fetch-mode", "cors", false),
            ("sec-fetch-site", "same-site", false),
            ("pragma", "no-cache", false),
            ("cache-control", "no-cache", false),
        ];

        let mut headers = HeaderMap::with_capacity(entries.len());
        for (name, value, sensitive) in entries {
            let mut value =
                HeaderValue::from_str(value).map_err(|_| HttpError::InvalidHeader { name })?;
            value.set_sensitive(sensitive);
            headers.insert(HeaderName::from_static(name), value);
        }
        Ok(headers)
    }

    /// Sends a request and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation
    /// and [`HttpError::Network`] on connection, TLS, or timeout failures.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        let response = HttpResponse::new(code, headers, body);
        tracing::debug!(
            "{} {} -> {}: {}",
            request.http_method,
            request.url,
            code,
            response.body_preview(BODY_PREVIEW_CHARS)
        );

        Ok(response)
    }

    /// Sends a request and fails on any non-2xx status.
    ///
    /// # Errors
    ///
    /// Everything [`send`](Self::send) returns, plus [`HttpError::Response`]
    /// for non-2xx responses.
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self.send(request).await?;

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code: response.code,
            message: response.body_preview(BODY_PREVIEW_CHARS),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Requests `url` so the cookie store picks up fresh session cookies.
    ///
    /// A non-2xx status is logged and returned, not treated as an error;
    /// only transport failures fail the call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on connection, TLS, or timeout failures.
    pub async fn prime_session(&self, url: &str, timeout: Duration) -> Result<u16, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, url)
            .timeout(timeout)
            .build()?;
        let response = self.send(&request).await?;

        if !response.is_ok() {
            tracing::warn!(
                "Session priming request to {} returned status {}",
                url,
                response.code
            );
        }

        Ok(response.code)
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
