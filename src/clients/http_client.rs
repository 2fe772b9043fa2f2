//! HTTP client for the MoySklad JSON API.
//!
//! [`HttpClient`] owns the reqwest client, the authorization header and the
//! retry policy. Everything above it speaks in paths and JSON values.

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, MoySkladConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Async HTTP client with authentication and retries.
///
/// # Retry Behavior
///
/// Each request is attempted up to `retry_count` times (from config, or the
/// request's own `tries`):
///
/// - **429**: waits for `X-Lognex-Retry-After`/`Retry-After`, or `retry_delay`
/// - **connect/timeout errors and truncated bodies**: exponential backoff
///   `retry_delay * 2^n` plus jitter
/// - **anything else**: returned immediately
///
/// The error from the final attempt is returned unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "entity/product")
///     .query_param("limit", "10")
///     .build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
    retry_count: u32,
    retry_delay: Duration,
    debug: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(config: &MoySkladConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}moysklad-api v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            "application/json;charset=utf-8".to_string(),
        );
        default_headers.insert("Accept-Encoding".to_string(), "gzip".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.credentials().authorization_header(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .gzip(true)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            retry_count: config.retry_count(),
            retry_delay: config.retry_delay(),
            debug: config.debug(),
        })
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request, retrying per the client's policy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The connection keeps failing (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = if request.is_absolute() {
            request.path.clone()
        } else {
            self.base_url.join(&request.path)
        };

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let tries = request.tries.unwrap_or(self.retry_count).max(1);
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            if self.debug {
                tracing::debug!(
                    method = %request.http_method,
                    url = %url,
                    query = ?request.query,
                    body = ?request.body,
                    attempt,
                    "sending request"
                );
            } else {
                tracing::debug!(method = %request.http_method, url = %url, attempt, "sending request");
            }

            let sent = match req_builder.send().await {
                Ok(res) => {
                    let code = res.status().as_u16();
                    let res_headers = Self::parse_response_headers(res.headers());
                    res.text().await.map(|text| (code, res_headers, text))
                }
                Err(error) => Err(error),
            };

            let (code, res_headers, body_text) = match sent {
                Ok(parts) => parts,
                Err(error) if Self::is_transient(&error) && attempt < tries => {
                    let delay = self.backoff_delay(attempt);
                    tracing::warn!(
                        url = %url,
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "network error, retrying: {error}"
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                Err(error) => return Err(HttpError::Network(error)),
            };

            let response = HttpResponse::new(code, res_headers, Self::parse_body(body_text));

            if self.debug {
                tracing::debug!(status = code, body = %response.body, "received response");
            }

            if response.is_ok() {
                if let Some(rate_limit) = response.rate_limit.filter(|r| r.is_exhausted()) {
                    tracing::debug!(limit = ?rate_limit.limit, "rate limit window exhausted");
                }
                return Ok(response);
            }

            if code == 429 && attempt < tries {
                let delay = response.retry_after.unwrap_or(self.retry_delay);
                tracing::warn!(
                    url = %url,
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "rate limited, retrying"
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            return Err(HttpError::Response(HttpResponseError::from_response(
                &response,
            )));
        }
    }

    /// Connection failures, timeouts and bodies cut off mid-transfer.
    fn is_transient(error: &reqwest::Error) -> bool {
        error.is_connect() || error.is_timeout() || error.is_body()
    }

    /// Parses response headers into a `HashMap` with lowercase keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn parse_body(text: String) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
    }

    /// `retry_delay * 2^(attempt - 1)` plus up to 10% jitter.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        let base = self.retry_delay.saturating_mul(factor);
        let jitter_cap = u64::try_from(base.as_millis() / 10).unwrap_or(0);
        let jitter = if jitter_cap == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_cap)
        };
        base + Duration::from_millis(jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    fn config(credentials: Credentials) -> MoySkladConfig {
        MoySkladConfig::builder()
            .credentials(credentials)
            .retry_delay(Duration::from_millis(100))
            .build()
            .unwrap()
    }

    #[test]
    fn test_bearer_authorization_header() {
        let client = HttpClient::new(&config(Credentials::token("tkn").unwrap())).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer tkn".to_string())
        );
    }

    #[test]
    fn test_basic_authorization_header() {
        let client =
            HttpClient::new(&config(Credentials::basic("admin@demo", "secret").unwrap())).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic YWRtaW5AZGVtbzpzZWNyZXQ=".to_string())
        );
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&config(Credentials::token("t").unwrap())).unwrap();
        let headers = client.default_headers();

        assert_eq!(
            headers.get("Accept"),
            Some(&"application/json;charset=utf-8".to_string())
        );
        assert_eq!(headers.get("Accept-Encoding"), Some(&"gzip".to_string()));
        let user_agent = headers.get("User-Agent").unwrap();
        assert!(user_agent.contains("moysklad-api v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .user_agent_prefix("Warehouse/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Warehouse/1.0 | "));
    }

    #[test]
    fn test_backoff_grows_exponentially() {
        let client = HttpClient::new(&config(Credentials::token("t").unwrap())).unwrap();

        let first = client.backoff_delay(1);
        let second = client.backoff_delay(2);
        let third = client.backoff_delay(3);

        assert!(first >= Duration::from_millis(100) && first <= Duration::from_millis(110));
        assert!(second >= Duration::from_millis(200) && second <= Duration::from_millis(220));
        assert!(third >= Duration::from_millis(400) && third <= Duration::from_millis(440));
    }

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(HttpClient::parse_body(String::new()), serde_json::json!({}));
        assert_eq!(
            HttpClient::parse_body("{\"a\":1}".to_string()),
            serde_json::json!({"a": 1})
        );
        assert_eq!(
            HttpClient::parse_body("oops".to_string()),
            serde_json::Value::String("oops".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
