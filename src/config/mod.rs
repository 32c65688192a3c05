//! Configuration types for the storefront admin client.
//!
//! # Overview
//!
//! - [`AdminConfig`]: settings shared by every request (base URL, user agent, timeout)
//! - [`AdminConfigBuilder`]: builder for [`AdminConfig`]
//! - [`BaseUrl`]: a validated catalog API address
//! - [`StorageId`]: a validated server-side record identity
//!
//! # Example
//!
//! ```rust
//! use storefront_admin::{AdminConfig, BaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(BaseUrl::new("https://catalog.example.com").unwrap())
//!     .user_agent_prefix("BackOffice/2.1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://catalog.example.com");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, StorageId, DEFAULT_BASE_URL};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the storefront admin client.
///
/// `AdminConfig` is `Clone`, `Send`, and `Sync`, so one instance can back
/// several clients.
#[derive(Clone, Debug, Default)]
pub struct AdminConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Returns the catalog API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout. `None` means requests never time out.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify AdminConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for constructing [`AdminConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AdminConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`AdminConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(AdminConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = AdminConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = AdminConfig::builder()
            .base_url(BaseUrl::new("https://shop-admin.example.com").unwrap())
            .user_agent_prefix("BackOffice/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert_eq!(config.base_url().host_name(), "shop-admin.example.com");
        assert_eq!(config.user_agent_prefix(), Some("BackOffice/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = AdminConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = AdminConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("AdminConfig"));
    }
}
