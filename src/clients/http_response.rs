//! HTTP response type for the catalog API.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;

/// An HTTP response from the catalog API.
///
/// The body is parsed as JSON when possible. An empty body parses to `{}`;
/// a non-JSON body is kept as `{"raw_body": "..."}` so that nothing the
/// server said is lost.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Parses a raw body into the JSON value stored on the response.
    #[must_use]
    pub fn parse_body(body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text)
            .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the server's error text from a `{"message": "..."}` body.
    ///
    /// Blank messages are treated as absent.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.trim().is_empty())
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        serde_json::from_value(self.body.clone()).map_err(|e| HttpError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}
