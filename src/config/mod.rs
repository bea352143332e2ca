//! Configuration types for the StockX API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MarketplaceConfig`]: Credentials, endpoints, and timeouts for one client
//! - [`MarketplaceConfigBuilder`]: A builder for constructing [`MarketplaceConfig`] instances
//! - [`ApiKey`] / [`PxAuthorization`]: Credential newtypes with masked debug output
//! - [`ClientName`]: The Apollo client name header value
//! - [`EndpointUrl`]: A validated absolute URL
//! - [`TransactionType`], [`CountryCode`], [`CurrencyCode`]: Market parameters
//!
//! # Example
//!
//! ```rust
//! use stockx_api::{MarketplaceConfig, ApiKey, PxAuthorization};
//!
//! let config = MarketplaceConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .px_authorization(PxAuthorization::new("my-px-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod market;
mod newtypes;

pub use market::{CountryCode, CurrencyCode, TransactionType};
pub use newtypes::{ApiKey, ClientName, EndpointUrl, PxAuthorization};

use std::time::Duration;

use crate::error::ConfigError;

/// Default GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://gateway.stockx.com/api/graphql";

/// Default web root requested before every query to refresh session cookies.
pub const DEFAULT_WEB_ROOT: &str = "https://stockx.com";

/// Default browser user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default timeout for the cookie-priming GET.
pub const DEFAULT_PRIMING_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for the GraphQL POST.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`MarketplaceClient`](crate::MarketplaceClient).
///
/// Credentials are static for the lifetime of a client. Rotating them means
/// building a new configuration and a new client.
///
/// # Thread Safety
///
/// `MarketplaceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct MarketplaceConfig {
    api_key: ApiKey,
    px_authorization: PxAuthorization,
    client_name: ClientName,
    user_agent: String,
    graphql_url: EndpointUrl,
    web_root: EndpointUrl,
    priming_timeout: Duration,
    request_timeout: Duration,
}

impl MarketplaceConfig {
    /// Creates a new builder for constructing a `MarketplaceConfig`.
    #[must_use]
    pub fn builder() -> MarketplaceConfigBuilder {
        MarketplaceConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the anti-bot authorization token.
    #[must_use]
    pub const fn px_authorization(&self) -> &PxAuthorization {
        &self.px_authorization
    }

    /// Returns the Apollo client name.
    #[must_use]
    pub const fn client_name(&self) -> &ClientName {
        &self.client_name
    }

    /// Returns the user agent string.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn graphql_url(&self) -> &EndpointUrl {
        &self.graphql_url
    }

    /// Returns the web root used to prime session cookies.
    #[must_use]
    pub const fn web_root(&self) -> &EndpointUrl {
        &self.web_root
    }

    /// Returns the timeout applied to the priming GET.
    #[must_use]
    pub const fn priming_timeout(&self) -> Duration {
        self.priming_timeout
    }

    /// Returns the timeout applied to the GraphQL POST.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

// Verify MarketplaceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarketplaceConfig>();
};

/// Builder for constructing [`MarketplaceConfig`] instances.
///
/// Required fields are `api_key` and `px_authorization`.
///
/// # Defaults
///
/// - `client_name`: `stockx-ios-prod`
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
/// - `graphql_url`: [`DEFAULT_GRAPHQL_URL`]
/// - `web_root`: [`DEFAULT_WEB_ROOT`]
/// - `priming_timeout`: 10 seconds
/// - `request_timeout`: 30 seconds
#[derive(Debug, Default)]
pub struct MarketplaceConfigBuilder {
    api_key: Option<ApiKey>,
    px_authorization: Option<PxAuthorization>,
    client_name: Option<ClientName>,
    user_agent: Option<String>,
    graphql_url: Option<EndpointUrl>,
    web_root: Option<EndpointUrl>,
    priming_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl MarketplaceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the anti-bot authorization token (required).
    #[must_use]
    pub fn px_authorization(mut self, token: PxAuthorization) -> Self {
        self.px_authorization = Some(token);
        self
    }

    /// Sets the Apollo client name.
    #[must_use]
    pub fn client_name(mut self, name: ClientName) -> Self {
        self.client_name = Some(name);
        self
    }

    /// Sets the user agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn graphql_url(mut self, url: EndpointUrl) -> Self {
        self.graphql_url = Some(url);
        self
    }

    /// Sets the web root requested to prime session cookies.
    #[must_use]
    pub fn web_root(mut self, url: EndpointUrl) -> Self {
        self.web_root = Some(url);
        self
    }

    /// Sets the timeout for the priming GET.
    #[must_use]
    pub const fn priming_timeout(mut self, timeout: Duration) -> Self {
        self.priming_timeout = Some(timeout);
        self
    }

    /// Sets the timeout for the GraphQL POST.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the [`MarketplaceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `px_authorization` are not set, and [`ConfigError::InvalidEndpointUrl`]
    /// if a default endpoint fails to parse.
    pub fn build(self) -> Result<MarketplaceConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let px_authorization = self
            .px_authorization
            .ok_or(ConfigError::MissingRequiredField {
                field: "px_authorization",
            })?;

        let graphql_url = match self.graphql_url {
            Some(url) => url,
            None => EndpointUrl::new(DEFAULT_GRAPHQL_URL)?,
        };
        let web_root = match self.web_root {
            Some(url) => url,
            None => EndpointUrl::new(DEFAULT_WEB_ROOT)?,
        };

        Ok(MarketplaceConfig {
            api_key,
            px_authorization,
            client_name: self.client_name.unwrap_or_default(),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            graphql_url,
            web_root,
            priming_timeout: self.priming_timeout.unwrap_or(DEFAULT_PRIMING_TIMEOUT),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        })
    }
}
