//! StockX marketplace queries.
//!
//! # Overview
//!
//! - [`MarketplaceClient`]: `fetch_price_levels` and `search_by_gtin`
//! - [`PriceLevelsQuery`]: Product, side, market, currency, and page for one call
//! - [`gtin_variables`]: Variable bindings for the GTIN lookup
//! - [`queries`]: The fixed GraphQL documents
//!
//! # Pagination
//!
//! Price levels come back one page at a time with a `pageInfo` block
//! (`page`, `count`, `total`, `hasNextPage`). The client never follows it on
//! its own; use [`PriceLevelsQuery::next_page`] to walk further.

mod client;
mod params;
pub mod queries;

pub use client::MarketplaceClient;
pub use params::{gtin_variables, PriceLevelsQuery, PriceLevelsQueryBuilder};
