//! Validated newtype wrappers for configuration and identity values.
//!
//! These wrappers validate their contents on construction so that malformed
//! values are rejected before they reach a request path.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Address of the catalog API the admin panel talks to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// A validated base URL for the catalog API.
///
/// The URL must carry an `http://` or `https://` scheme and a host. Trailing
/// slashes are trimmed so that paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use storefront_admin::BaseUrl;
///
/// let url = BaseUrl::new("https://catalog.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://catalog.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "catalog.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] for an empty string and
    /// [`ConfigError::InvalidBaseUrl`] when the scheme or host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }

    /// Joins a relative path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: 4,
            host_end: DEFAULT_BASE_URL.rfind(':').unwrap_or(DEFAULT_BASE_URL.len()),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Server-assigned storage identity of a catalog record (the `_id` field).
///
/// This is distinct from a product's user-supplied `id`. It is what the
/// update and delete endpoints are keyed on.
///
/// # Example
///
/// ```rust
/// use storefront_admin::StorageId;
///
/// let id = StorageId::new("665f1c2ab3").unwrap();
/// assert_eq!(id.as_ref(), "665f1c2ab3");
/// assert!(StorageId::new("  ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageId(String);

impl StorageId {
    /// Creates a new storage identity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageId`] if the value is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyStorageId);
        }
        Ok(Self(id))
    }

    /// Returns the identity percent-encoded for use as a path segment.
    #[must_use]
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl AsRef<str> for StorageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StorageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StorageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("http://localhost:5000/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:5000");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(matches!(BaseUrl::new(""), Err(ConfigError::EmptyBaseUrl)));
        assert!(BaseUrl::new("localhost:5000").is_err());
        assert!(BaseUrl::new("ftp://files.example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
    }

    #[test]
    fn test_base_url_default_matches_constant() {
        let url = BaseUrl::default();
        assert_eq!(url, BaseUrl::new(DEFAULT_BASE_URL).unwrap());
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_join() {
        let url = BaseUrl::new("https://api.example.com/v2").unwrap();
        assert_eq!(url.join("products/add"), "https://api.example.com/v2/products/add");
        assert_eq!(url.join("/products"), "https://api.example.com/v2/products");
    }

    #[test]
    fn test_storage_id_path_segment_is_encoded() {
        let id = StorageId::new("a b/c").unwrap();
        assert_eq!(id.path_segment(), "a%20b%2Fc");
    }

    #[test]
    fn test_storage_id_deserialize_rejects_blank() {
        let result: Result<StorageId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());

        let id: StorageId = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(id.as_ref(), "abc123");
    }
}
