//! Market parameter types.
//!
//! The gateway accepts these as free-form strings and rejects bad values
//! server-side. Modelling them here catches typos before a request is built.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Side of the order book to read price levels from.
///
/// # Example
///
/// ```rust
/// use stockx_api::TransactionType;
///
/// let side: TransactionType = "bid".parse().unwrap();
/// assert_eq!(side, TransactionType::Bid);
/// assert_eq!(side.to_string(), "BID");
/// assert!("SELL".parse::<TransactionType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Buy-side levels.
    Bid,
    /// Sell-side levels.
    Ask,
}

impl TransactionType {
    /// Returns the wire value (`"BID"` or `"ASK"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bid => "BID",
            Self::Ask => "ASK",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BID" => Ok(Self::Bid),
            "ASK" => Ok(Self::Ask),
            _ => Err(ConfigError::InvalidTransactionType {
                value: s.to_string(),
            }),
        }
    }
}

/// A two-letter ISO 3166 country code, stored upper-case.
///
/// # Example
///
/// ```rust
/// use stockx_api::CountryCode;
///
/// let country = CountryCode::new("gb").unwrap();
/// assert_eq!(country.as_ref(), "GB");
/// assert_eq!(CountryCode::default().as_ref(), "US");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a new validated country code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCountryCode`] unless the code is exactly
    /// two ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        let normalized = code.trim().to_ascii_uppercase();
        if normalized.len() != 2 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCountryCode { code });
        }
        Ok(Self(normalized))
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self("US".to_string())
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A three-letter ISO 4217 currency code, stored upper-case.
///
/// # Example
///
/// ```rust
/// use stockx_api::CurrencyCode;
///
/// let currency = CurrencyCode::new("eur").unwrap();
/// assert_eq!(currency.as_ref(), "EUR");
/// assert_eq!(CurrencyCode::default().as_ref(), "USD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a new validated currency code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCurrencyCode`] unless the code is exactly
    /// three ASCII letters.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        let normalized = code.trim().to_ascii_uppercase();
        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCurrencyCode { code });
        }
        Ok(Self(normalized))
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self("USD".to_string())
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
