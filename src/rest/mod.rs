//! Entity and repository infrastructure.
//!
//! - **[`Entity`] trait**: resource path, `meta.type` and id access for a data type
//! - **[`EntityRepository<T>`]**: generic CRUD, bulk and metadata operations
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper carrying the list meta,
//!   rate-limit state and request id
//! - **[`Meta`] and [`EntityRef`]**: locators and `{"meta": ...}` references
//! - **[`Attribute`] and [`HasAttributes`]**: custom field helpers
//! - **[`ResourceError`]**: semantic error types for entity operations
//!
//! Entity types live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::{MoySklad, MoySkladConfig};
//! use moysklad_api::query::Filter;
//! use moysklad_api::rest::resources::Product;
//!
//! let client = MoySklad::from_env()?;
//!
//! // One page
//! let page = client.products.find_all(None).await?;
//! println!("{} of {:?} products", page.len(), page.total_size());
//!
//! // Every page
//! let query = client.products.query().filter(Filter::new().eq("archived", false));
//! let all = client.products.fetch_all(Some(&query)).await?;
//!
//! // Create, update, delete
//! let created = client.products.create(&Product::named("Widget")).await?;
//! let mut changed = created.clone();
//! changed.article = Some("W-1".to_string());
//! client.products.update(&changed).await?;
//! client.products.delete(created.id.as_deref().unwrap_or_default()).await?;
//! ```

mod attributes;
pub mod datetime;
mod entity;
mod errors;
mod meta;
mod repository;
mod response;

pub mod resources;

pub use attributes::{Attribute, HasAttributes, ATTRIBUTE_TYPE};
pub use entity::Entity;
pub use errors::{ResourceError, DEFAULT_RATE_LIMIT_WAIT};
pub use meta::{EntityRef, Meta, JSON_MEDIA_TYPE};
pub use repository::{params, EntityRepository};
pub use response::{
    check_type, decode_as, decode_entity, decode_list, decode_many, ListResponse, ResourceResponse,
};
