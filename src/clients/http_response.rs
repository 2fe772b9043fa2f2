//! HTTP response types.
//!
//! [`HttpResponse`] parses the rate-limit headers the API attaches to every
//! response so callers can pace themselves.

use std::collections::HashMap;
use std::time::Duration;

/// Rate-limit state reported by the server.
///
/// | Header | Field |
/// |---|---|
/// | `X-RateLimit-Limit` | `limit` |
/// | `X-RateLimit-Remaining` | `remaining` |
/// | `X-Lognex-Retry-TimeInterval` | `interval` (milliseconds) |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: Option<u32>,
    /// Requests left in the current window.
    pub remaining: Option<u32>,
    /// Length of the window.
    pub interval: Option<Duration>,
}

impl RateLimit {
    /// Parses rate-limit headers; returns `None` if none are present.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(|v| v.trim().to_string())
        };

        let limit = first("x-ratelimit-limit").and_then(|v| v.parse().ok());
        let remaining = first("x-ratelimit-remaining").and_then(|v| v.parse().ok());
        let interval = first("x-lognex-retry-timeinterval")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis);

        if limit.is_none() && remaining.is_none() && interval.is_none() {
            return None;
        }

        Some(Self {
            limit,
            remaining,
            interval,
        })
    }

    /// Returns `true` when no requests remain in the window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.remaining, Some(0))
    }
}

/// A response received from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keys lowercased (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed body. Empty bodies become `{}`; non-JSON bodies become a string.
    pub body: serde_json::Value,
    /// Rate-limit state, if reported.
    pub rate_limit: Option<RateLimit>,
    /// Wait suggested by the server before the next request.
    ///
    /// Read from `X-Lognex-Retry-After` (milliseconds) or `Retry-After` (seconds).
    pub retry_after: Option<Duration>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        let retry_after = Self::parse_retry_after(&headers);

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_after,
        }
    }

    fn parse_retry_after(headers: &HashMap<String, Vec<String>>) -> Option<Duration> {
        let lognex = headers
            .get("x-lognex-retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_millis);

        lognex.or_else(|| {
            headers
                .get("retry-after")
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse::<f64>().ok())
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .map(Duration::from_secs_f64)
        })
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the request id header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        ["x-lognex-request-id", "x-request-id"]
            .iter()
            .find_map(|name| self.headers.get(*name).and_then(|values| values.first()))
            .map(String::as_str)
    }

    /// Returns the first value of a header (name is case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_rate_limit_parsed_from_headers() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("x-ratelimit-limit", "45"),
                ("x-ratelimit-remaining", "44"),
                ("x-lognex-retry-timeinterval", "3000"),
            ]),
            json!({}),
        );

        let rate_limit = response.rate_limit.unwrap();
        assert_eq!(rate_limit.limit, Some(45));
        assert_eq!(rate_limit.remaining, Some(44));
        assert_eq!(rate_limit.interval, Some(Duration::from_secs(3)));
        assert!(!rate_limit.is_exhausted());
    }

    #[test]
    fn test_no_rate_limit_without_headers() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.rate_limit.is_none());
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_lognex_retry_after_is_milliseconds() {
        let response = HttpResponse::new(
            429,
            headers(&[("x-lognex-retry-after", "250"), ("retry-after", "9")]),
            json!({}),
        );
        assert_eq!(response.retry_after, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_standard_retry_after_is_seconds() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "2.5")]), json!({}));
        assert_eq!(response.retry_after, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_is_ok_range() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_request_id_prefers_lognex_header() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-lognex-request-id", "a"), ("x-request-id", "b")]),
            json!({}),
        );
        assert_eq!(response.request_id(), Some("a"));
        assert_eq!(response.header("X-Request-Id"), Some("b"));
    }
}
