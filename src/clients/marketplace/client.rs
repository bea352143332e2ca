//! The StockX marketplace client.

use std::fmt;
use std::num::NonZeroU32;

use serde_json::Value;

use crate::clients::graphql::{GraphqlClient, GraphqlError, GraphqlRequest};
use crate::clients::marketplace::params::{gtin_variables, PriceLevelsQuery};
use crate::clients::marketplace::queries::{FETCH_VARIANTS_FROM_GTIN, GET_VARIANT_PRICE_LEVELS};
use crate::clients::HttpError;
use crate::config::{MarketplaceConfig, TransactionType};

/// Client for the two StockX queries this crate supports.
///
/// Each call makes two sequential requests on the client's own session:
/// a GET to the web root to refresh cookies, then the GraphQL POST. The
/// decoded response body is returned untouched.
///
/// # Thread Safety
///
/// `MarketplaceClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use std::num::NonZeroU32;
/// use stockx_api::{ApiKey, MarketplaceClient, MarketplaceConfig, PxAuthorization, TransactionType};
///
/// let config = MarketplaceConfig::builder()
///     .api_key(ApiKey::new("your-api-key")?)
///     .px_authorization(PxAuthorization::new("your-px-token")?)
///     .build()?;
/// let client = MarketplaceClient::new(&config)?;
///
/// let bids = client
///     .fetch_price_levels_page("abc-123", TransactionType::Bid, NonZeroU32::MIN)
///     .await?;
/// println!("{}", bids["data"]["variant"]["market"]["priceLevels"]["pageInfo"]);
///
/// // Treat any failure as "no data".
/// let product = client.search_by_gtin("012345678905").await.ok();
/// ```
#[derive(Debug)]
pub struct MarketplaceClient {
    graphql: GraphqlClient,
}

// Verify MarketplaceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarketplaceClient>();
};

impl MarketplaceClient {
    /// Creates a client with its own session.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if a configured credential cannot
    /// be sent as a header, or [`HttpError::Network`] if the HTTP client
    /// cannot be built.
    pub fn new(config: &MarketplaceConfig) -> Result<Self, HttpError> {
        Ok(Self {
            graphql: GraphqlClient::new(config)?,
        })
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Fetches one page of bid or ask levels for a variant.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn fetch_price_levels(&self, query: &PriceLevelsQuery) -> Result<Value, GraphqlError> {
        tracing::debug!(
            "Fetching {} levels for {} (page {})",
            query.transaction_type(),
            query.product_id(),
            query.page()
        );
        let request = GraphqlRequest::new(GET_VARIANT_PRICE_LEVELS, query.variables());
        self.graphql.execute(&request).await
    }

    /// Fetches one page of levels in the US market, priced in USD.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn fetch_price_levels_page(
        &self,
        product_id: &str,
        transaction_type: TransactionType,
        page: NonZeroU32,
    ) -> Result<Value, GraphqlError> {
        let query = PriceLevelsQuery::for_page(product_id, transaction_type, page);
        self.fetch_price_levels(&query).await
    }

    /// Looks up every variant carrying the given GTIN.
    ///
    /// # Errors
    ///
    /// See [`GraphqlClient::execute`].
    pub async fn search_by_gtin(&self, gtin: impl fmt::Display) -> Result<Value, GraphqlError> {
        let variables = gtin_variables(gtin);
        tracing::debug!("Searching variants for GTIN {}", variables["gtin"]);
        let request = GraphqlRequest::new(FETCH_VARIANTS_FROM_GTIN, variables);
        self.graphql.execute(&request).await
    }
}
