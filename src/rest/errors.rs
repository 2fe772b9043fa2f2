//! Error taxonomy for entity operations.
//!
//! HTTP status codes are mapped to semantic variants:
//!
//! - **401**: [`ResourceError::Authentication`]
//! - **404**: [`ResourceError::NotFound`]
//! - **429**: [`ResourceError::RateLimited`] (after retries are spent)
//! - **other 4xx**: [`ResourceError::ValidationFailed`]
//! - **5xx**: [`ResourceError::Api`]
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::rest::ResourceError;
//!
//! match client.products.find_by_id("0b8c1a3e-…", None).await {
//!     Ok(product) => println!("Found: {:?}", product.name),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{resource} {id} is gone");
//!     }
//!     Err(ResourceError::ValidationFailed { message, .. }) => println!("Rejected: {message}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::time::Duration;

use crate::clients::{ApiErrorDetail, HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Wait assumed for a 429 without a retry header.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Error type for entity operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Credentials were rejected (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Message returned by the server.
        message: String,
        /// Request id for support tickets.
        request_id: Option<String>,
    },

    /// The entity does not exist (HTTP 404).
    #[error("{resource} with id {id} not found: {message}")]
    NotFound {
        /// Entity type name (e.g., "Product").
        resource: &'static str,
        /// Requested id, or `unknown` for list endpoints.
        id: String,
        /// Message returned by the server.
        message: String,
    },

    /// The rate limit is still exceeded after every retry (HTTP 429).
    #[error("Rate limit exceeded, retry after {retry_after:?}: {message}")]
    RateLimited {
        /// Suggested wait before the next request.
        retry_after: Duration,
        /// Message returned by the server.
        message: String,
    },

    /// The server rejected the request (HTTP 4xx other than 401/404/429).
    #[error("Validation failed ({code}): {message}")]
    ValidationFailed {
        /// HTTP status code.
        code: u16,
        /// Joined error messages.
        message: String,
        /// Structured error entries.
        errors: Vec<ApiErrorDetail>,
        /// Request id for support tickets.
        request_id: Option<String>,
    },

    /// The server failed to process the request (HTTP 5xx and anything else).
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code.
        code: u16,
        /// Joined error messages.
        message: String,
        /// Structured error entries.
        errors: Vec<ApiErrorDetail>,
        /// Request id for support tickets.
        request_id: Option<String>,
    },

    /// An update was attempted on an entity without an id.
    #[error("{resource} must have an id for this operation")]
    MissingId {
        /// Entity type name.
        resource: &'static str,
    },

    /// The response describes a different entity type.
    #[error("Expected {resource} of type '{expected}', got '{found}'")]
    UnexpectedType {
        /// Entity type name.
        resource: &'static str,
        /// Type the repository serves.
        expected: &'static str,
        /// Type found in `meta.type`.
        found: String,
    },

    /// The response body could not be parsed.
    #[error("Failed to parse {resource} response: {source}")]
    Deserialize {
        /// Entity type name.
        resource: &'static str,
        /// The serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The entity could not be serialized into a request body.
    #[error("Failed to serialize {resource}: {source}")]
    Serialize {
        /// Entity type name.
        resource: &'static str,
        /// The serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A transport-level error (network failure or invalid request).
    #[error(transparent)]
    Http(HttpError),

    /// A client-level error (invalid path or foreign URL).
    #[error(transparent)]
    Rest(RestError),
}

impl ResourceError {
    /// Maps a failed response to a semantic variant.
    #[must_use]
    pub fn from_response_error(
        error: HttpResponseError,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        let HttpResponseError {
            code,
            message,
            errors,
            retry_after,
            error_reference,
        } = error;

        match code {
            401 => Self::Authentication {
                message,
                request_id: error_reference,
            },
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
                message,
            },
            429 => Self::RateLimited {
                retry_after: retry_after.unwrap_or(DEFAULT_RATE_LIMIT_WAIT),
                message,
            },
            400..=499 => Self::ValidationFailed {
                code,
                message,
                errors,
                request_id: error_reference,
            },
            _ => Self::Api {
                code,
                message,
                errors,
                request_id: error_reference,
            },
        }
    }

    /// Maps a client error, attributing 404s to `resource`/`id`.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) => Self::from_response_error(e, resource, id),
            RestError::Http(e) => Self::Http(e),
            other => Self::Rest(other),
        }
    }

    /// Returns the HTTP status code, when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::ValidationFailed { code, .. } | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the structured error entries, if any.
    #[must_use]
    pub fn errors(&self) -> &[ApiErrorDetail] {
        match self {
            Self::ValidationFailed { errors, .. } | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Returns the request id if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Authentication { request_id, .. }
            | Self::ValidationFailed { request_id, .. }
            | Self::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        Self::from_rest_error(error, "Resource", None)
    }
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        Self::from_rest_error(RestError::Http(error), "Resource", None)
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
