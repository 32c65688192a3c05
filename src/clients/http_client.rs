//! HTTP client for catalog API communication.
//!
//! This module provides the [`HttpClient`] type. Every request is a single
//! attempt: the catalog API has no retry contract, and a failed submission
//! must be resubmitted explicitly by the user.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::{AdminConfig, BaseUrl};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the catalog API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - JSON and multipart request bodies
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_admin::AdminConfig;
/// use storefront_admin::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&AdminConfig::default())?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &AdminConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Storefront Admin v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the catalog API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // Multipart sets its own Content-Type with the boundary.
        match &request.body {
            Some(RequestBody::Json(body)) => {
                req_builder = req_builder
                    .header("Content-Type", DataType::Json.as_content_type())
                    .body(body.to_string());
            }
            Some(RequestBody::Multipart(payload)) => {
                req_builder = req_builder.multipart(payload.to_form()?);
            }
            None => {}
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending catalog API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();
        let response = HttpResponse::new(code, res_headers, HttpResponse::parse_body(&body_text));

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            method = %request.http_method,
            path = %request.path,
            code,
            server_message = response.message().unwrap_or_default(),
            "Catalog API rejected request"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.message().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> HttpClient {
        HttpClient::new(&AdminConfig::default()).unwrap()
    }

    #[test]
    fn test_client_uses_default_base_url() {
        let client = create_test_client();
        assert_eq!(client.base_url().as_ref(), "http://localhost:5000");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Storefront Admin v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = AdminConfig::builder()
            .user_agent_prefix("BackOffice/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("BackOffice/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_sending() {
        let client = create_test_client();
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: "products/add".to_string(),
            body: None,
        };

        let result = client.request(request).await;
        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }
}
