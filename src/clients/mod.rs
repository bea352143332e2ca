//! HTTP and GraphQL client types for the StockX gateway.
//!
//! # Overview
//!
//! - [`HttpClient`]: Session holder (default headers + cookie store)
//! - [`HttpRequest`] / [`HttpResponse`]: One exchange with the gateway
//! - [`HttpMethod`]: GET for priming, POST for queries
//! - [`graphql::GraphqlClient`]: Primes the session and posts GraphQL documents
//! - [`marketplace::MarketplaceClient`]: The price-level and GTIN queries
//!
//! # Request Flow
//!
//! Every query performs two requests on the same session, in order:
//!
//! 1. `GET` the web root (10s timeout). Cookies from the response are kept.
//!    A non-2xx status is logged and ignored; a transport failure aborts.
//! 2. `POST` `{"query", "variables"}` to the GraphQL endpoint (30s timeout).
//!
//! There is no retry at any layer.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;
pub mod marketplace;

pub use errors::{DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, BODY_PREVIEW_CHARS, ORIGIN, REFERER};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError, GraphqlRequest};
pub use marketplace::{MarketplaceClient, PriceLevelsQuery};
