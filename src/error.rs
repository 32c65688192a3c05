//! Configuration error types for the storefront admin client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad base URL is rejected before any request is attempted.
//!
//! # Example
//!
//! ```rust
//! use storefront_admin::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`AdminConfig`](crate::AdminConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide the catalog API address (e.g., 'http://localhost:5000').")]
    EmptyBaseUrl,

    /// Base URL is missing an HTTP scheme.
    #[error("Invalid base URL '{url}'. Expected an 'http://' or 'https://' URL.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A timeout of zero would fail every request.
    #[error("Request timeout must be greater than zero.")]
    ZeroTimeout,

    /// A storage identity (`_id`) cannot be blank.
    #[error("Storage id cannot be empty.")]
    EmptyStorageId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_url_error_message() {
        let message = ConfigError::EmptyBaseUrl.to_string();
        assert!(message.contains("cannot be empty"));
        assert!(message.contains("localhost:5000"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://example.com"));
        assert!(message.contains("http://"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::ZeroTimeout;
        let _: &dyn std::error::Error = &error;
    }
}
