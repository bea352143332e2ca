//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the credential and endpoint
//! strings the client needs. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;

/// A validated StockX gateway API key (`x-api-key` header).
///
/// The `Debug` implementation masks the key so it never lands in logs.
///
/// # Example
///
/// ```rust
/// use stockx_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated PerimeterX authorization token (`x-px-authorization` header).
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `PxAuthorization(*****)`.
#[derive(Clone, PartialEq, Eq)]
pub struct PxAuthorization(String);

impl PxAuthorization {
    /// Creates a new validated anti-bot token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPxAuthorization`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyPxAuthorization);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for PxAuthorization {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PxAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PxAuthorization(*****)")
    }
}

/// The Apollo client name sent as `apollographql-client-name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientName(String);

impl ClientName {
    /// Client name used by the StockX iOS app.
    pub const IOS: &'static str = "stockx-ios-prod";

    /// Creates a new validated client name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyClientName);
        }
        Ok(Self(name.to_string()))
    }
}

impl Default for ClientName {
    fn default() -> Self {
        Self(Self::IOS.to_string())
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated absolute `http` or `https` URL.
///
/// Used for both the GraphQL endpoint and the web root that primes the
/// session cookies.
///
/// # Example
///
/// ```rust
/// use stockx_api::EndpointUrl;
///
/// let url = EndpointUrl::new("https://gateway.stockx.com/api/graphql").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("gateway.stockx.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(Url);

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL does not parse,
    /// has a scheme other than `http`/`https`, or has no host.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let invalid = || ConfigError::InvalidEndpointUrl {
            url: raw.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
