//! HTTP transport for the catalog API.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestBody`]: JSON or multipart request bodies
//! - [`MultipartPayload`]: an ordered, inspectable multipart body
//!
//! # Retry Behavior
//!
//! There is none. Each request is one attempt; transport failures and non-2xx
//! responses are returned to the caller as [`HttpError`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod multipart;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
pub use multipart::{
    content_type_for, FileAttachment, MultipartPayload, Part, PartValue, FALLBACK_CONTENT_TYPE,
};
