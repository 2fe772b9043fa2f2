//! Path-oriented client on top of [`HttpClient`](crate::clients::HttpClient).
//!
//! - [`RestClient`]: `get()`, `post()`, `put()`, `delete()` and `get_url()`
//! - [`RestError`]: error type for these operations
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/entity/product` -> `entity/product`
//! - Empty paths are rejected with [`RestError::InvalidPath`]
//! - Absolute URLs (such as a list's `nextHref`) go through
//!   [`RestClient::get_url`] and must start with the configured base URL

mod client;
mod errors;

pub use client::{QueryParams, RestClient};
pub use errors::RestError;
