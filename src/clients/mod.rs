//! HTTP transport for the MoySklad JSON API.
//!
//! # Overview
//!
//! - [`HttpClient`]: async client with authentication and retries
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response, including [`RateLimit`] state
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: content types for request bodies
//! - [`rest::RestClient`]: path-oriented client used by repositories
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: waits for `X-Lognex-Retry-After` (ms) or
//!   `Retry-After` (s), falling back to the configured `retry_delay`
//! - **Connection errors, timeouts and truncated bodies**: exponential backoff
//!   from `retry_delay`
//! - **Other errors**: returned immediately without retry
//!
//! The number of attempts defaults to the configured `retry_count` (3).

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiErrorDetail, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

pub use rest::{QueryParams, RestClient, RestError};
