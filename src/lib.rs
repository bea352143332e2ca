//! # StockX API Rust Client
//!
//! A thin async client for the StockX gateway GraphQL API: variant price
//! levels (bid/ask order-book entries) and product lookup by GTIN.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MarketplaceConfig`] and [`MarketplaceConfigBuilder`]
//! - Credential newtypes whose `Debug` output is masked
//! - Closed types for market parameters ([`TransactionType`], [`CountryCode`], [`CurrencyCode`])
//! - A cookie-backed session with the gateway's fixed header set
//! - [`MarketplaceClient::fetch_price_levels`] and [`MarketplaceClient::search_by_gtin`]
//!
//! Responses are returned as raw [`serde_json::Value`]; the crate does not
//! model StockX's product schema.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockx_api::{
//!     ApiKey, MarketplaceClient, MarketplaceConfig, PriceLevelsQuery, PxAuthorization,
//!     TransactionType,
//! };
//!
//! let config = MarketplaceConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .px_authorization(PxAuthorization::new("your-px-token")?)
//!     .build()?;
//!
//! let client = MarketplaceClient::new(&config)?;
//!
//! let query = PriceLevelsQuery::builder("variant-uuid", TransactionType::Ask)
//!     .page(2)
//!     .build()?;
//! let asks = client.fetch_price_levels(&query).await?;
//!
//! let variants = client.search_by_gtin("196153044813").await?;
//! ```
//!
//! ## Errors
//!
//! Failures are reported, not swallowed. [`GraphqlError`] says whether the
//! priming GET or the query POST failed, and the wrapped [`HttpError`]
//! separates network failures, non-2xx responses, and undecodable bodies.
//! Every failure is also logged through `tracing` at `warn` level.
//!
//! ## Design Principles
//!
//! - **No global state**: Each client owns its configuration and session
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;

pub use config::{
    ApiKey, ClientName, CountryCode, CurrencyCode, EndpointUrl, MarketplaceConfig,
    MarketplaceConfigBuilder, PxAuthorization, TransactionType,
};
pub use error::ConfigError;

pub use clients::{
    DecodeError, GraphqlClient, GraphqlError, GraphqlRequest, HttpClient, HttpError, HttpMethod,
    HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MarketplaceClient, PriceLevelsQuery,
};
