//! GraphQL layer for the StockX gateway.
//!
//! This module sits between the raw [`HttpClient`](crate::clients::HttpClient)
//! and the [`MarketplaceClient`](crate::clients::marketplace::MarketplaceClient).
//! It knows how to prime the session and how to post a `{query, variables}`
//! body, but nothing about StockX's schema.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Primes cookies, posts the document, decodes the body
//! - [`GraphqlRequest`]: A document plus its variables
//! - [`GraphqlError`]: Which of the two round trips failed, and how
//!
//! # Response Structure
//!
//! Bodies are returned verbatim. A typical body carries `data` and, when the
//! gateway rejects part of a query, an `errors` array alongside HTTP 200.

mod client;
mod errors;

pub use client::{GraphqlClient, GraphqlRequest};
pub use errors::GraphqlError;
