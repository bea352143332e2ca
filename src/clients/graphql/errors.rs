//! GraphQL-specific error types for the StockX API client.
//!
//! A query makes two round trips, so failures are split by which one broke.
//! GraphQL-level errors (an `errors` array in a 200 body) are not errors
//! here: they are part of the returned JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use stockx_api::clients::graphql::GraphqlError;
//!
//! match client.search_by_gtin("012345678905").await {
//!     Ok(body) => println!("{}", body["data"]),
//!     Err(e) if e.is_rejected() => println!("Gateway said no: {}", e),
//!     Err(e) if e.is_network() => println!("Could not reach StockX: {}", e),
//!     Err(e) => println!("Other failure: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The cookie-priming GET failed, so the query was never sent.
    #[error("Session priming failed: {0}")]
    Priming(#[source] HttpError),

    /// The GraphQL POST failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl GraphqlError {
    /// Returns the underlying HTTP error.
    #[must_use]
    pub const fn http_error(&self) -> &HttpError {
        match self {
            Self::Priming(e) | Self::Http(e) => e,
        }
    }

    /// Returns `true` for connection, TLS, and timeout failures on either request.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self.http_error(), HttpError::Network(_))
    }

    /// Returns `true` if the gateway answered the query with a non-2xx status.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Http(HttpError::Response(_)))
    }

    /// Returns `true` if the gateway answered 2xx with a body that is not JSON.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Http(HttpError::Decode(_)))
    }

    /// Returns the HTTP status of the failed request, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.http_error().status()
    }
}
