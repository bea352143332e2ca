//! Per-call parameters and their variable bindings.

use std::fmt;
use std::num::NonZeroU32;

use serde_json::{json, Value};

use crate::config::{CountryCode, CurrencyCode, TransactionType};
use crate::error::ConfigError;

/// Parameters for one page of price levels.
///
/// Paging is left to the caller: read `pageInfo.hasNextPage` from the
/// response and request [`next_page`](Self::next_page) if more is wanted.
///
/// # Example
///
/// ```rust
/// use stockx_api::{PriceLevelsQuery, TransactionType};
/// use serde_json::json;
///
/// let query = PriceLevelsQuery::builder("abc-123", TransactionType::Bid)
///     .page(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     query.variables(),
///     json!({
///         "product_uuid": "abc-123",
///         "transactionType": "BID",
///         "country": "US",
///         "currency_code": "USD",
///         "page": 2
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceLevelsQuery {
    product_id: String,
    transaction_type: TransactionType,
    country: CountryCode,
    currency_code: CurrencyCode,
    page: u32,
}

impl PriceLevelsQuery {
    /// Creates a query for the first page in the US market, priced in USD.
    #[must_use]
    pub fn new(product_id: impl Into<String>, transaction_type: TransactionType) -> Self {
        Self {
            product_id: product_id.into(),
            transaction_type,
            country: CountryCode::default(),
            currency_code: CurrencyCode::default(),
            page: 1,
        }
    }

    /// Creates a query for `page` in the US market, priced in USD.
    #[must_use]
    pub fn for_page(
        product_id: impl Into<String>,
        transaction_type: TransactionType,
        page: NonZeroU32,
    ) -> Self {
        Self {
            page: page.get(),
            ..Self::new(product_id, transaction_type)
        }
    }

    /// Creates a builder for overriding the market, currency, or page.
    #[must_use]
    pub fn builder(
        product_id: impl Into<String>,
        transaction_type: TransactionType,
    ) -> PriceLevelsQueryBuilder {
        PriceLevelsQueryBuilder {
            query: Self::new(product_id, transaction_type),
        }
    }

    /// Returns the variant identifier.
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the order-book side.
    #[must_use]
    pub const fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Returns the country the levels are read for.
    #[must_use]
    pub const fn country(&self) -> &CountryCode {
        &self.country
    }

    /// Returns the currency amounts are expressed in.
    #[must_use]
    pub const fn currency_code(&self) -> &CurrencyCode {
        &self.currency_code
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the same query for the following page.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    /// Returns the GraphQL variables for `GetVariantPriceLevels`.
    #[must_use]
    pub fn variables(&self) -> Value {
        json!({
            "product_uuid": self.product_id,
            "transactionType": self.transaction_type,
            "country": self.country,
            "currency_code": self.currency_code,
            "page": self.page,
        })
    }
}

/// Builder for [`PriceLevelsQuery`].
#[derive(Debug)]
pub struct PriceLevelsQueryBuilder {
    query: PriceLevelsQuery,
}

impl PriceLevelsQueryBuilder {
    /// Sets the country (default `US`).
    #[must_use]
    pub fn country(mut self, country: CountryCode) -> Self {
        self.query.country = country;
        self
    }

    /// Sets the currency (default `USD`).
    #[must_use]
    pub fn currency_code(mut self, currency_code: CurrencyCode) -> Self {
        self.query.currency_code = currency_code;
        self
    }

    /// Sets the 1-based page (default 1).
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.query.page = page;
        self
    }

    /// Builds the query.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPage`] if the page is 0.
    pub fn build(self) -> Result<PriceLevelsQuery, ConfigError> {
        if self.query.page == 0 {
            return Err(ConfigError::InvalidPage { page: 0 });
        }
        Ok(self.query)
    }
}

/// Returns the GraphQL variables for `FetchVariantsFromGTIN`.
///
/// The identifier is sent in its `Display` form; the market is fixed to the
/// US, priced in USD.
///
/// # Example
///
/// ```rust
/// use stockx_api::clients::marketplace::gtin_variables;
/// use serde_json::json;
///
/// assert_eq!(
///     gtin_variables("012345678905"),
///     json!({"gtin": "012345678905", "currencyCode": "USD", "country": "US", "market": "US"})
/// );
/// ```
#[must_use]
pub fn gtin_variables(gtin: impl fmt::Display) -> Value {
    json!({
        "gtin": gtin.to_string(),
        "currencyCode": CurrencyCode::default(),
        "country": CountryCode::default(),
        "market": CountryCode::default(),
    })
}
