//! Request credentials.
//!
//! The API accepts either a bearer token or HTTP Basic credentials built
//! from the account login and password.

use crate::config::{AccessToken, Login, Password};
use crate::error::ConfigError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Credentials used to authorize every request.
///
/// # Example
///
/// ```rust
/// use moysklad_api::Credentials;
///
/// let credentials = Credentials::token("abc").unwrap();
/// assert_eq!(credentials.authorization_header(), "Bearer abc");
///
/// let credentials = Credentials::basic("admin@demo", "secret").unwrap();
/// assert_eq!(
///     credentials.authorization_header(),
///     "Basic YWRtaW5AZGVtbzpzZWNyZXQ="
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// A bearer access token.
    Token(AccessToken),
    /// Login and password sent as HTTP Basic authorization.
    Basic {
        /// Account login.
        login: Login,
        /// Account password.
        password: Password,
    },
}

impl Credentials {
    /// Builds bearer-token credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn token(token: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::Token(AccessToken::new(token)?))
    }

    /// Builds Basic credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogin`] or [`ConfigError::EmptyPassword`].
    pub fn basic(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::Basic {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }

    /// Returns `true` for login/password credentials.
    #[must_use]
    pub const fn is_basic(&self) -> bool {
        matches!(self, Self::Basic { .. })
    }

    /// Returns the value of the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Token(token) => format!("Bearer {}", token.as_ref()),
            Self::Basic { login, password } => {
                let raw = format!("{}:{}", login.as_ref(), password.as_ref());
                format!("Basic {}", STANDARD.encode(raw))
            }
        }
    }
}

impl From<AccessToken> for Credentials {
    fn from(token: AccessToken) -> Self {
        Self::Token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let credentials = Credentials::token("token-value").unwrap();
        assert_eq!(credentials.authorization_header(), "Bearer token-value");
        assert!(!credentials.is_basic());
    }

    #[test]
    fn test_basic_header_is_base64_of_login_and_password() {
        let credentials = Credentials::basic("admin@test", "pa:ss").unwrap();
        let expected = format!("Basic {}", STANDARD.encode("admin@test:pa:ss"));
        assert_eq!(credentials.authorization_header(), expected);
        assert!(credentials.is_basic());
    }

    #[test]
    fn test_debug_never_shows_secrets() {
        let credentials = Credentials::basic("admin@test", "hunter2").unwrap();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("admin@test"));
        assert!(!debug.contains("hunter2"));

        let credentials = Credentials::token("very-secret").unwrap();
        assert!(!format!("{credentials:?}").contains("very-secret"));
    }

    #[test]
    fn test_invalid_parts_are_rejected() {
        assert!(matches!(
            Credentials::token(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            Credentials::basic("", "x"),
            Err(ConfigError::EmptyLogin)
        ));
        assert!(matches!(
            Credentials::basic("a", ""),
            Err(ConfigError::EmptyPassword)
        ));
    }
}
