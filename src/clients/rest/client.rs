//! REST client implementation.

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{BaseUrl, MoySkladConfig};

/// Query parameters in insertion order.
pub type QueryParams = Vec<(String, String)>;

/// REST client with `get`, `post`, `put` and `delete` helpers.
///
/// `RestClient` is `Send + Sync`; repositories share one instance through an
/// `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::{Credentials, MoySkladConfig, RestClient};
///
/// let config = MoySkladConfig::builder()
///     .credentials(Credentials::token("token")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("entity/product", None).await?;
/// let body = serde_json::json!({"name": "Widget"});
/// let response = client.post("entity/product", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &MoySkladConfig) -> Result<Self, RestError> {
        tracing::debug!(base_url = %config.base_url(), "creating REST client");
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.http_client.base_url()
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a GET request to an absolute URL returned by the API.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ForeignUrl`] if the URL does not start with the
    /// configured base URL, or [`RestError::Http`] for HTTP-level errors.
    pub async fn get_url(&self, url: &str) -> Result<HttpResponse, RestError> {
        let base = self.base_url().as_ref();
        let inside = url
            .strip_prefix(base)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?']));
        if !inside {
            return Err(RestError::ForeignUrl {
                url: url.to_string(),
                base_url: base.to_string(),
            });
        }

        let request = HttpRequest::builder(HttpMethod::Get, url)
            .build()
            .map_err(|e| RestError::Http(e.into()))?;
        self.http_client.request(request).await.map_err(Into::into)
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }
        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Strips leading `/` characters and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let normalized = path.trim().trim_start_matches('/');
    if normalized.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/entity/product").unwrap(), "entity/product");
        assert_eq!(normalize_path("//entity/product").unwrap(), "entity/product");
    }

    #[test]
    fn test_normalize_path_keeps_nested_paths() {
        assert_eq!(
            normalize_path("entity/customerorder/abc/positions").unwrap(),
            "entity/customerorder/abc/positions"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_exposes_base_url() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .base_url(BaseUrl::new("http://localhost:1234/api").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_ref(), "http://localhost:1234/api");
    }

    #[tokio::test]
    async fn test_get_url_rejects_foreign_host() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();

        let result = client.get_url("https://example.com/entity/product").await;
        assert!(matches!(result, Err(RestError::ForeignUrl { .. })));

        let result = client
            .get_url("https://api.moysklad.ru/api/remap/1.20/entity/product")
            .await;
        assert!(matches!(result, Err(RestError::ForeignUrl { .. })));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
