//! HTTP request types for the storefront admin client.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::multipart::MultipartPayload;

/// HTTP methods used by the catalog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Multipart form data (`multipart/form-data`). The boundary is added at send time.
    Multipart,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => "multipart/form-data",
        }
    }
}

/// A request body.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document.
    Json(serde_json::Value),
    /// A multipart form.
    Multipart(MultipartPayload),
}

impl RequestBody {
    /// Returns the content type of this body.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Json(_) => DataType::Json,
            Self::Multipart(_) => DataType::Multipart,
        }
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<MultipartPayload> for RequestBody {
    fn from(payload: MultipartPayload) -> Self {
        Self::Multipart(payload)
    }
}

/// An HTTP request to be sent to the catalog API.
///
/// # Example
///
/// ```rust
/// use storefront_admin::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "products")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "api/v1/topcategories")
///     .body(json!({"name": "Shoes", "isActive": true, "showInNavbar": true}))
///     .build()
///     .unwrap();
/// assert_eq!(post_request.body_type(), Some(DataType::Json));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the content type of the body, if there is one.
    #[must_use]
    pub fn body_type(&self) -> Option<DataType> {
        self.body.as_ref().map(RequestBody::data_type)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method, &self.body) {
            (HttpMethod::Post | HttpMethod::Put, None) => {
                Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method.to_string(),
                })
            }
            (HttpMethod::Get | HttpMethod::Delete, Some(_)) => {
                Err(InvalidHttpRequestError::UnexpectedBody {
                    method: self.http_method.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
        }
    }

    /// Sets the request body. JSON values and multipart payloads both convert.
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
