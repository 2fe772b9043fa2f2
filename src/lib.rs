//! # MoySklad API client
//!
//! An async Rust client for the MoySklad JSON API 1.2: typed entities,
//! a generic CRUD repository, per-entity extensions and a query builder
//! for filtering, sorting, paging and expansion.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`MoySkladConfig`] and [`MoySkladConfigBuilder`]
//! - Bearer token or login/password [`Credentials`], with
//!   [`auth::obtain_access_token`] to trade the latter for the former
//! - Async HTTP transport with rate-limit aware retries ([`clients`])
//! - Serde entity types for products, documents, counterparties and more
//!   ([`rest::resources`])
//! - [`rest::EntityRepository`] for CRUD and bulk operations on any entity
//! - The [`MoySklad`] facade exposing one repository per entity type
//!
//! ## Quick Start
//!
//! ```rust
//! use moysklad_api::{BaseUrl, Credentials, MoySklad, MoySkladConfig};
//!
//! let config = MoySkladConfig::builder()
//!     .credentials(Credentials::token("your-token").unwrap())
//!     .base_url(BaseUrl::new("https://api.moysklad.ru/api/remap/1.2").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = MoySklad::new(config).unwrap();
//! assert_eq!(client.products.path(), "entity/product");
//! ```
//!
//! ## Querying
//!
//! ```rust,ignore
//! use moysklad_api::query::{Filter, OrderBy};
//!
//! let query = client
//!     .customer_orders
//!     .query()
//!     .filter(Filter::new().eq("applicable", true).gte("moment", since))
//!     .order_by(OrderBy::new().desc("moment"))
//!     .expand(["agent", "positions"])
//!     .limit(100);
//!
//! let page = client.customer_orders.find_all(Some(&query)).await?;
//! let everything = client.customer_orders.fetch_all(Some(&query)).await?;
//! ```
//!
//! ## Errors
//!
//! Entity operations return [`rest::ResourceError`], whose variants follow
//! the HTTP status (401, 404, 429, other 4xx, 5xx) and carry the API's
//! `errors[]` entries.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod repositories;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{obtain_access_token, AuthError, Credentials};
pub use client::{ClientError, MoySklad};
pub use config::{AccessToken, BaseUrl, Login, MoySkladConfig, MoySkladConfigBuilder, Password};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiErrorDetail, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RateLimit, RestClient, RestError,
};

// Re-export entity infrastructure
pub use query::{Filter, OrderBy, QueryBuilder, SortDirection};
pub use rest::{Entity, EntityRef, EntityRepository, Meta, ResourceError, ResourceResponse};
