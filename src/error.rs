//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or URLs are rejected before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`MoySkladConfig`](crate::MoySkladConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid MoySklad access token.")]
    EmptyAccessToken,

    /// Login cannot be empty.
    #[error("Login cannot be empty. Please provide a MoySklad login such as 'admin@company'.")]
    EmptyLogin,

    /// Password cannot be empty.
    #[error("Password cannot be empty.")]
    EmptyPassword,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.moysklad.ru/api/remap/1.2').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Retry count must allow at least one attempt.
    #[error("Invalid retry count {count}. At least one attempt is required.")]
    InvalidRetryCount {
        /// The rejected count.
        count: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Neither token nor login/password were found in the environment.
    #[error("Missing environment variable '{name}'. Set MOYSKLAD_TOKEN or MOYSKLAD_LOGIN and MOYSKLAD_PASSWORD.")]
    MissingEnvironmentVariable {
        /// The variable that was looked up last.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "credentials",
        };
        let message = error.to_string();
        assert!(message.contains("credentials"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_missing_env_var_names_alternatives() {
        let error = ConfigError::MissingEnvironmentVariable {
            name: "MOYSKLAD_PASSWORD",
        };
        let message = error.to_string();
        assert!(message.contains("MOYSKLAD_PASSWORD"));
        assert!(message.contains("MOYSKLAD_TOKEN"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyLogin;
        let _: &dyn std::error::Error = &error;
    }
}
