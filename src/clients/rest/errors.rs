//! Error types for [`RestClient`](super::RestClient).

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST operations.
///
/// # Example
///
/// ```rust
/// use moysklad_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path is empty after normalization.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An absolute URL points outside the configured API root.
    #[error("URL '{url}' is outside of the API root '{base_url}'")]
    ForeignUrl {
        /// The rejected URL.
        url: String,
        /// The configured API root.
        base_url: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "///".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Invalid REST API path"));
        assert!(message.contains("///"));
    }

    #[test]
    fn test_foreign_url_names_both_urls() {
        let error = RestError::ForeignUrl {
            url: "https://evil.example/entity".to_string(),
            base_url: "https://api.moysklad.ru/api/remap/1.2".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("evil.example"));
        assert!(message.contains("api.moysklad.ru"));
    }

    #[test]
    fn test_http_error_is_transparent() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Object not found".to_string(),
            errors: Vec::new(),
            retry_after: None,
            error_reference: None,
        });
        let error: RestError = http_error.into();
        assert_eq!(error.to_string(), "Object not found");
    }

    #[test]
    fn test_from_invalid_request() {
        let error: RestError = HttpError::from(InvalidHttpRequestError::MissingBodyType).into();
        assert!(matches!(
            error,
            RestError::Http(HttpError::InvalidRequest(_))
        ));
    }
}
