//! Client configuration.
//!
//! - [`MoySkladConfig`]: immutable settings shared by every request
//! - [`MoySkladConfigBuilder`]: fluent builder with defaults
//! - [`AccessToken`], [`Login`], [`Password`], [`BaseUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::{Credentials, MoySkladConfig};
//! use std::time::Duration;
//!
//! let config = MoySkladConfig::builder()
//!     .credentials(Credentials::token("my-token").unwrap())
//!     .retry_count(5)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retry_count(), 5);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, Login, Password};

use crate::auth::Credentials;
use crate::error::ConfigError;
use std::time::Duration;

/// Default number of attempts per request.
pub const DEFAULT_RETRY_COUNT: u32 = 3;

/// Default base delay between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a [`MoySklad`](crate::MoySklad) client.
///
/// `MoySkladConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct MoySkladConfig {
    credentials: Credentials,
    base_url: BaseUrl,
    retry_count: u32,
    retry_delay: Duration,
    timeout: Duration,
    debug: bool,
    user_agent_prefix: Option<String>,
}

impl MoySkladConfig {
    /// Creates a new builder for constructing a `MoySkladConfig`.
    #[must_use]
    pub fn builder() -> MoySkladConfigBuilder {
        MoySkladConfigBuilder::new()
    }

    /// Builds a configuration from environment variables.
    ///
    /// `MOYSKLAD_TOKEN` takes precedence; otherwise both `MOYSKLAD_LOGIN` and
    /// `MOYSKLAD_PASSWORD` must be set. `MOYSKLAD_BASE_URL` overrides the
    /// endpoint and `MOYSKLAD_DEBUG=true` enables body logging.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] when no credentials
    /// are present, or a validation error for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let credentials = if let Some(token) = lookup("MOYSKLAD_TOKEN") {
            Credentials::token(token)?
        } else {
            let login = lookup("MOYSKLAD_LOGIN").ok_or(ConfigError::MissingEnvironmentVariable {
                name: "MOYSKLAD_LOGIN",
            })?;
            let password =
                lookup("MOYSKLAD_PASSWORD").ok_or(ConfigError::MissingEnvironmentVariable {
                    name: "MOYSKLAD_PASSWORD",
                })?;
            Credentials::basic(login, password)?
        };

        let mut builder = Self::builder().credentials(credentials);
        if let Some(url) = lookup("MOYSKLAD_BASE_URL") {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        if let Some(debug) = lookup("MOYSKLAD_DEBUG") {
            builder = builder.debug(matches!(debug.trim(), "1" | "true" | "TRUE" | "True"));
        }
        builder.build()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the number of attempts per request.
    #[must_use]
    pub const fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Returns the base delay between attempts.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether request and response bodies are logged.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MoySkladConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySkladConfig>();
};

/// Builder for [`MoySkladConfig`].
///
/// Only `credentials` is required.
///
/// # Defaults
///
/// - `base_url`: `https://api.moysklad.ru/api/remap/1.2`
/// - `retry_count`: 3
/// - `retry_delay`: 1 second
/// - `timeout`: 60 seconds
/// - `debug`: `false`
#[derive(Debug, Default)]
pub struct MoySkladConfigBuilder {
    credentials: Option<Credentials>,
    base_url: Option<BaseUrl>,
    retry_count: Option<u32>,
    retry_delay: Option<Duration>,
    timeout: Option<Duration>,
    debug: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl MoySkladConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the API root URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the number of attempts per request.
    #[must_use]
    pub const fn retry_count(mut self, count: u32) -> Self {
        self.retry_count = Some(count);
        self
    }

    /// Sets the base delay between attempts.
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables logging of request and response bodies at `debug` level.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MoySkladConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no credentials were
    /// set, or [`ConfigError::InvalidRetryCount`] for a zero retry count.
    pub fn build(self) -> Result<MoySkladConfig, ConfigError> {
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        let retry_count = self.retry_count.unwrap_or(DEFAULT_RETRY_COUNT);
        if retry_count == 0 {
            return Err(ConfigError::InvalidRetryCount { count: retry_count });
        }

        Ok(MoySkladConfig {
            credentials,
            base_url: self.base_url.unwrap_or_default(),
            retry_count,
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            debug: self.debug.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn token_config() -> MoySkladConfig {
        MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = MoySkladConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = token_config();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert_eq!(config.retry_count(), 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(1));
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(!config.debug());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_retry_count() {
        let result = MoySkladConfig::builder()
            .credentials(Credentials::token("token").unwrap())
            .retry_count(0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRetryCount { count: 0 })
        ));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::basic("admin@demo", "pw").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000/api").unwrap())
            .retry_count(1)
            .retry_delay(Duration::from_millis(10))
            .timeout(Duration::from_secs(5))
            .debug(true)
            .user_agent_prefix("Warehouse/2.0")
            .build()
            .unwrap();

        assert!(config.credentials().is_basic());
        assert_eq!(config.base_url().as_ref(), "http://localhost:9000/api");
        assert_eq!(config.retry_count(), 1);
        assert_eq!(config.retry_delay(), Duration::from_millis(10));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.debug());
        assert_eq!(config.user_agent_prefix(), Some("Warehouse/2.0"));
    }

    #[test]
    fn test_from_lookup_prefers_token() {
        let vars: HashMap<&str, &str> = [
            ("MOYSKLAD_TOKEN", "tok"),
            ("MOYSKLAD_LOGIN", "admin@demo"),
            ("MOYSKLAD_PASSWORD", "pw"),
            ("MOYSKLAD_BASE_URL", "http://127.0.0.1:1234"),
            ("MOYSKLAD_DEBUG", "true"),
        ]
        .into_iter()
        .collect();

        let config =
            MoySkladConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();

        assert_eq!(config.credentials().authorization_header(), "Bearer tok");
        assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:1234");
        assert!(config.debug());
    }

    #[test]
    fn test_from_lookup_falls_back_to_login_and_password() {
        let vars: HashMap<&str, &str> = [("MOYSKLAD_LOGIN", "admin@demo"), ("MOYSKLAD_PASSWORD", "pw")]
            .into_iter()
            .collect();

        let config =
            MoySkladConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();
        assert!(config.credentials().is_basic());
    }

    #[test]
    fn test_from_lookup_reports_missing_password() {
        let result = MoySkladConfig::from_lookup(|name| {
            (name == "MOYSKLAD_LOGIN").then(|| "admin@demo".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvironmentVariable {
                name: "MOYSKLAD_PASSWORD"
            })
        ));
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_token() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("secret-token").unwrap())
            .build()
            .unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MoySkladConfig"));
        assert!(!debug_str.contains("secret-token"));
    }
}
