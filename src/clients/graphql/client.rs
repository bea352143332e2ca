//! GraphQL client implementation for the StockX gateway.

use std::time::Duration;

use serde_json::Value;

use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::MarketplaceConfig;

/// A GraphQL document and its bound variables.
///
/// # Example
///
/// ```rust
/// use stockx_api::clients::graphql::GraphqlRequest;
/// use serde_json::json;
///
/// let request = GraphqlRequest::new(
///     "query GetVariant($id: String!) { variant(id: $id) { id } }",
///     json!({ "id": "abc-123" }),
/// );
///
/// assert_eq!(request.operation_name(), Some("GetVariant"));
/// assert_eq!(request.to_body()["variables"]["id"], "abc-123");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphqlRequest<'a> {
    /// The GraphQL document.
    pub query: &'a str,
    /// Variables referenced by the document.
    pub variables: Value,
}

impl<'a> GraphqlRequest<'a> {
    /// Creates a new request.
    #[must_use]
    pub const fn new(query: &'a str, variables: Value) -> Self {
        Self { query, variables }
    }

    /// Returns the POST body: `{"query": ..., "variables": ...}`.
    #[must_use]
    pub fn to_body(&self) -> Value {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
        })
    }

    /// Returns the operation name declared by the document, if any.
    #[must_use]
    pub fn operation_name(&self) -> Option<&'a str> {
        let rest = self.query.trim_start().strip_prefix("query")?;
        let rest = rest.trim_start();
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    }
}

/// GraphQL client for the StockX gateway.
///
/// Every query first requests the web root so the session picks up fresh
/// cookies, then POSTs the document to the GraphQL endpoint. The two
/// requests are strictly sequential; if the first fails, the second is
/// never sent.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`.
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
    graphql_url: String,
    web_root: String,
    priming_timeout: Duration,
    request_timeout: Duration,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::new`].
    pub fn new(config: &MarketplaceConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            graphql_url: config.graphql_url().to_string(),
            web_root: config.web_root().to_string(),
            priming_timeout: config.priming_timeout(),
            request_timeout: config.request_timeout(),
        })
    }

    /// Returns the GraphQL endpoint this client posts to.
    #[must_use]
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// Primes the session, then executes `request` and returns the decoded body.
    ///
    /// The body is returned as-is, including any GraphQL `errors` array.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Priming`] if the priming GET fails at the transport level
    /// - [`GraphqlError::Http`] if the POST fails, returns non-2xx, or returns
    ///   a body that is not JSON
    pub async fn execute(&self, request: &GraphqlRequest<'_>) -> Result<Value, GraphqlError> {
        let operation = request.operation_name().unwrap_or("anonymous");

        if let Err(e) = self
            .http_client
            .prime_session(&self.web_root, self.priming_timeout)
            .await
        {
            tracing::warn!("Error priming session for {}: {}", operation, e);
            return Err(GraphqlError::Priming(e));
        }

        self.post(request).await.map_err(|e| {
            tracing::warn!("Error executing {}: {}", operation, e);
            GraphqlError::Http(e)
        })
    }

    /// Executes a raw document with variables.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn query(&self, query: &str, variables: Value) -> Result<Value, GraphqlError> {
        self.execute(&GraphqlRequest::new(query, variables)).await
    }

    async fn post(&self, request: &GraphqlRequest<'_>) -> Result<Value, HttpError> {
        let http_request = HttpRequest::builder(HttpMethod::Post, self.graphql_url.as_str())
            .body(request.to_body())
            .timeout(self.request_timeout)
            .build()?;

        let response = self.http_client.request(&http_request).await?;
        Ok(response.json()?)
    }
}
