//! The [`Entity`] trait implemented by every resource type.
//!
//! An entity declares where it lives (`PATH`), what `meta.type` the server
//! reports for it (`TYPE`) and how to reach its locator and id. The generic
//! [`EntityRepository`](crate::rest::EntityRepository) needs nothing else.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::rest::{Entity, Meta};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Region {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub meta: Option<Meta>,
//!     #[serde(skip_serializing)]
//!     pub id: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub name: Option<String>,
//! }
//!
//! impl Entity for Region {
//!     const NAME: &'static str = "Region";
//!     const TYPE: &'static str = "region";
//!     const PATH: &'static str = "entity/region";
//!
//!     fn meta(&self) -> Option<&Meta> {
//!         self.meta.as_ref()
//!     }
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::config::BaseUrl;
use crate::rest::{EntityRef, Meta};

/// A resource type served by the API.
///
/// Server-assigned fields (`id`, `accountId`, `created`, `updated`) must be
/// marked `#[serde(skip_serializing)]` so they never reach a request body.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human-readable name used in error messages (e.g., "Product").
    const NAME: &'static str;

    /// Value of `meta.type` for this entity (e.g., "product").
    const TYPE: &'static str;

    /// Resource path relative to the API root (e.g., "entity/product").
    const PATH: &'static str;

    /// Returns the entity's locator, if it has one.
    fn meta(&self) -> Option<&Meta>;

    /// Returns the server-assigned id, if known.
    fn id(&self) -> Option<&str>;

    /// Returns `true` if a payload with this `meta.type` decodes into `Self`.
    ///
    /// Polymorphic endpoints such as the assortment override this.
    #[must_use]
    fn accepts_type(entity_type: &str) -> bool {
        entity_type == Self::TYPE
    }

    /// Returns the id, falling back to the segment after `PATH` in `meta.href`
    /// and then to the last segment of `meta.href`.
    fn entity_id(&self) -> Option<String> {
        if let Some(id) = self.id().filter(|id| !id.is_empty()) {
            return Some(id.to_string());
        }
        let meta = self.meta()?;
        meta.id_after(Self::PATH)
            .or_else(|| meta.id())
            .map(str::to_string)
    }

    /// Returns a `{"meta": ...}` reference to this entity.
    ///
    /// Uses the entity's own meta when present, otherwise builds one from the
    /// id. Returns `None` for entities that were never saved.
    fn to_ref(&self, base: &BaseUrl) -> Option<EntityRef> {
        if let Some(meta) = self.meta().filter(|m| !m.href.is_empty()) {
            return Some(EntityRef::from(meta.clone()));
        }
        self.entity_id()
            .map(|id| EntityRef::new(base, Self::PATH, &id, Self::TYPE))
    }

    /// Builds the meta of `{base}/{PATH}/{id}`.
    #[must_use]
    fn meta_for(base: &BaseUrl, id: &str) -> Meta {
        Meta::for_entity(base, Self::PATH, id, Self::TYPE)
    }
}
