//! HTTP-specific error types for the storefront admin client.
//!
//! - [`HttpResponseError`]: non-2xx responses from the catalog API
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type for all HTTP-related failures
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_admin::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {:?}", e.code, e.message);
//!     }
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The catalog API reports failures as `{"message": "..."}`. When that field
/// is present it is carried verbatim in `message`.
///
/// # Example
///
/// ```rust
/// use storefront_admin::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 400,
///     message: Some("Duplicate id".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "Request failed with status 400: Duplicate id");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The server-provided `message`, if the body carried one.
    pub message: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },

    /// A multipart part could not be encoded.
    #[error("Invalid multipart part '{name}': {reason}")]
    InvalidPart {
        /// The part name.
        name: String,
        /// Why the part was rejected.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response body did not have the expected shape.
    #[error("Unexpected response body from '{path}': {reason}")]
    Decode {
        /// The request path.
        path: String,
        /// The deserialization failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_without_message() {
        let error = HttpResponseError {
            code: 502,
            message: None,
        };
        assert_eq!(error.to_string(), "Request failed with status 502: no message");
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");

        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "delete".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a body with delete.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: None,
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::InvalidPart {
            name: "gallery".to_string(),
            reason: "bad mime".to_string(),
        };
        let _ = invalid_error;
    }
}
