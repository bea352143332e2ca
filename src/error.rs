//! Error types for the StockX API client.
//!
//! This module contains error types used throughout the crate for
//! configuration and input validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or market codes are rejected before anything reaches the network.
//!
//! # Example
//!
//! ```rust
//! use stockx_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration or input validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid StockX gateway API key.")]
    EmptyApiKey,

    /// Anti-bot authorization token cannot be empty.
    #[error("PX authorization token cannot be empty. Please provide a valid x-px-authorization value.")]
    EmptyPxAuthorization,

    /// Apollo client name cannot be empty.
    #[error("Client name cannot be empty.")]
    EmptyClientName,

    /// An endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://gateway.stockx.com/api/graphql').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Country code is invalid.
    #[error("Invalid country code '{code}'. Expected a two-letter ISO 3166 code (e.g., 'US').")]
    InvalidCountryCode {
        /// The invalid code that was provided.
        code: String,
    },

    /// Currency code is invalid.
    #[error("Invalid currency code '{code}'. Expected a three-letter ISO 4217 code (e.g., 'USD').")]
    InvalidCurrencyCode {
        /// The invalid code that was provided.
        code: String,
    },

    /// Transaction type is not one of the supported values.
    #[error("Invalid transaction type '{value}'. Expected 'BID' or 'ASK'.")]
    InvalidTransactionType {
        /// The invalid value that was provided.
        value: String,
    },

    /// Page numbers are 1-based.
    #[error("Invalid page {page}. Pages start at 1.")]
    InvalidPage {
        /// The invalid page that was provided.
        page: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_invalid_transaction_type_error_message() {
        let error = ConfigError::InvalidTransactionType {
            value: "SELL".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("SELL"));
        assert!(message.contains("'BID' or 'ASK'"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "px_authorization",
        };
        let message = error.to_string();
        assert!(message.contains("px_authorization"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidPage { page: 0 };
        let _: &dyn std::error::Error = &error;
    }
}
