//! Authentication.
//!
//! - [`Credentials`]: bearer token or login/password, rendered as the
//!   `Authorization` header of every request
//! - [`obtain_access_token`]: exchanges login/password for a bearer token
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::auth::Credentials;
//!
//! let credentials = Credentials::token("abc").unwrap();
//! assert!(!credentials.is_basic());
//! ```

mod credentials;
mod token;

pub use credentials::Credentials;
pub use token::{obtain_access_token, AuthError, TOKEN_PATH};
