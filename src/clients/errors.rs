//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response, after retries
//! - [`InvalidHttpRequestError`]: a request rejected before sending
//! - [`HttpError`]: the unified error returned by [`HttpClient`](crate::clients::HttpClient)
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::clients::{HttpError, HttpRequest, HttpMethod};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// One entry of the `errors` array the API returns with failed requests.
///
/// ```json
/// {"errors": [{"error": "Field 'name' is required", "code": 3000, "parameter": "name"}]}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    /// Human-readable description.
    #[serde(default)]
    pub error: String,
    /// Numeric API error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Offending request parameter, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// Link to the error documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    /// Additional message some endpoints attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Error returned when a request receives a non-successful response.
///
/// `message` is built from the body: the `errors[].error` strings joined with
/// `"; "`, else the top-level `error` string, else the raw body text.
///
/// # Example
///
/// ```rust
/// use moysklad_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Object not found".to_string(),
///     errors: Vec::new(),
///     retry_after: None,
///     error_reference: None,
/// };
/// assert_eq!(error.to_string(), "Object not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Flattened error message.
    pub message: String,
    /// Structured error entries from the body.
    pub errors: Vec<ApiErrorDetail>,
    /// Suggested wait before retrying, from the rate-limit headers.
    pub retry_after: Option<Duration>,
    /// Request id for support tickets, if the server sent one.
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Builds an error from a failed response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let errors = response
            .body
            .get("errors")
            .and_then(|value| serde_json::from_value::<Vec<ApiErrorDetail>>(value.clone()).ok())
            .unwrap_or_default();

        Self {
            code: response.code,
            message: Self::extract_message(response, &errors),
            errors,
            retry_after: response.retry_after,
            error_reference: response.request_id().map(String::from),
        }
    }

    fn extract_message(response: &HttpResponse, errors: &[ApiErrorDetail]) -> String {
        if !errors.is_empty() {
            return errors
                .iter()
                .map(|e| e.error.as_str())
                .collect::<Vec<_>>()
                .join("; ");
        }

        if let Some(error) = response.body.get("error").and_then(|v| v.as_str()) {
            return error.to_string();
        }

        match &response.body {
            serde_json::Value::String(text) if !text.is_empty() => text.clone(),
            serde_json::Value::Object(map) if map.is_empty() => {
                reqwest::StatusCode::from_u16(response.code)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A request was configured with zero attempts.
    #[error("A request needs at least one attempt.")]
    ZeroTries,
}

/// Unified error type for all HTTP-related errors.
///
/// Rate-limit responses that persist through every attempt surface as
/// [`HttpError::Response`] with code 429; connection failures that persist
/// surface as [`HttpError::Network`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, or `0` for errors that never reached the server.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Response(e) => e.code,
            Self::InvalidRequest(_) | Self::Network(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(code: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_message_joins_error_entries() {
        let error = HttpResponseError::from_response(&response(
            412,
            json!({"errors": [
                {"error": "Field 'name' is required", "code": 3000, "parameter": "name"},
                {"error": "Field 'code' is too long", "code": 3006}
            ]}),
        ));

        assert_eq!(
            error.message,
            "Field 'name' is required; Field 'code' is too long"
        );
        assert_eq!(error.errors.len(), 2);
        assert_eq!(error.errors[0].code, Some(3000));
        assert_eq!(error.errors[0].parameter.as_deref(), Some("name"));
    }

    #[test]
    fn test_message_falls_back_to_error_field() {
        let error =
            HttpResponseError::from_response(&response(400, json!({"error": "Bad request"})));
        assert_eq!(error.message, "Bad request");
        assert!(error.errors.is_empty());
    }

    #[test]
    fn test_message_uses_raw_text_body() {
        let error = HttpResponseError::from_response(&response(
            502,
            serde_json::Value::String("<html>Bad Gateway</html>".to_string()),
        ));
        assert_eq!(error.message, "<html>Bad Gateway</html>");
    }

    #[test]
    fn test_message_uses_status_reason_for_empty_body() {
        let error = HttpResponseError::from_response(&response(404, json!({})));
        assert_eq!(error.message, "Not Found");
    }

    #[test]
    fn test_error_reference_and_retry_after_are_carried() {
        let mut headers = HashMap::new();
        headers.insert("x-lognex-retry-after".to_string(), vec!["1500".to_string()]);
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        let error =
            HttpResponseError::from_response(&HttpResponse::new(429, headers, json!({})));

        assert_eq!(error.retry_after, Some(Duration::from_millis(1500)));
        assert_eq!(error.error_reference.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "post".to_string()
            }
            .to_string(),
            "Cannot use post without specifying data."
        );
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_status_of_non_response_errors_is_zero() {
        let error = HttpError::from(InvalidHttpRequestError::ZeroTries);
        assert_eq!(error.status(), 0);
    }
}
