//! Response wrappers for entity operations.
//!
//! - [`ListResponse<T>`]: the raw `{"meta", "rows", "context"}` envelope of
//!   list endpoints
//! - [`ResourceResponse<T>`]: decoded data plus the list meta, rate-limit
//!   state and request id of the HTTP response
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, so a page of
//! products behaves like the `Vec<Product>` it wraps:
//!
//! ```rust,ignore
//! let page = client.products.find_all(None).await?;
//!
//! for product in page.iter() {
//!     println!("{:?}", product.name);
//! }
//! println!("{} of {:?}", page.len(), page.total_size());
//!
//! let products: Vec<Product> = page.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RateLimit};
use crate::rest::{Entity, Meta, ResourceError};

/// The envelope of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub rows: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            meta: Meta::default(),
            rows: Vec::new(),
            context: None,
        }
    }
}

/// A response from an entity operation.
///
/// # Example
///
/// ```rust
/// use moysklad_api::rest::{Meta, ResourceResponse};
///
/// let meta = Meta {
///     size: Some(3),
///     next_href: Some("https://api.moysklad.ru/api/remap/1.2/entity/uom?offset=2".to_string()),
///     ..Meta::default()
/// };
/// let response = ResourceResponse::new(vec!["pcs", "kg"], Some(meta), None, None);
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.total_size(), Some(3));
/// assert!(response.has_next_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    meta: Option<Meta>,
    rate_limit: Option<RateLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(
        data: T,
        meta: Option<Meta>,
        rate_limit: Option<RateLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            meta,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the list meta (size, limit, offset, paging links).
    #[must_use]
    pub const fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Returns the total number of matching rows reported by the server.
    #[must_use]
    pub fn total_size(&self) -> Option<u64> {
        self.meta.as_ref().and_then(|m| m.size)
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_href().is_some()
    }

    /// Returns the absolute URL of the next page.
    #[must_use]
    pub fn next_href(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.next_href.as_deref())
    }

    /// Returns the absolute URL of the previous page.
    #[must_use]
    pub fn previous_href(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.previous_href.as_deref())
    }

    /// Returns the rate-limit state, if reported.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request id from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            meta: self.meta,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: Entity> ResourceResponse<T> {
    /// Decodes a single entity from an HTTP response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedType`] if `meta.type` belongs to
    /// another entity, or [`ResourceError::Deserialize`] for malformed bodies.
    pub fn from_entity_response(response: HttpResponse) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.rate_limit;
        let data = decode_entity::<T>(response.body)?;
        Ok(Self::new(data, None, rate_limit, request_id))
    }
}

impl<T: Entity> ResourceResponse<Vec<T>> {
    /// Decodes a list envelope from an HTTP response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedType`] if a row belongs to another
    /// entity, or [`ResourceError::Deserialize`] for malformed bodies.
    pub fn from_list_response(response: HttpResponse) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.rate_limit;
        let list = decode_list::<T>(response.body)?;
        Ok(Self::new(list.rows, Some(list.meta), rate_limit, request_id))
    }
}

/// Checks `meta.type` of a raw object against `T`.
///
/// Objects without a `meta.type` pass.
///
/// # Errors
///
/// Returns [`ResourceError::UnexpectedType`] on mismatch.
pub fn check_type<T: Entity>(value: &Value) -> Result<(), ResourceError> {
    match value.pointer("/meta/type").and_then(Value::as_str) {
        Some(found) if !T::accepts_type(found) => Err(ResourceError::UnexpectedType {
            resource: T::NAME,
            expected: T::TYPE,
            found: found.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Decodes one entity, checking its `meta.type` first.
///
/// # Errors
///
/// Returns [`ResourceError::UnexpectedType`] or [`ResourceError::Deserialize`].
pub fn decode_entity<T: Entity>(value: Value) -> Result<T, ResourceError> {
    check_type::<T>(&value)?;
    serde_json::from_value(value).map_err(|source| ResourceError::Deserialize {
        resource: T::NAME,
        source,
    })
}

/// Decodes a list envelope, checking every row's `meta.type`.
///
/// # Errors
///
/// Returns [`ResourceError::UnexpectedType`] or [`ResourceError::Deserialize`].
pub fn decode_list<T: Entity>(value: Value) -> Result<ListResponse<T>, ResourceError> {
    let envelope: ListResponse<Value> =
        serde_json::from_value(value).map_err(|source| ResourceError::Deserialize {
            resource: T::NAME,
            source,
        })?;

    let rows = envelope
        .rows
        .into_iter()
        .map(decode_entity::<T>)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListResponse {
        meta: envelope.meta,
        rows,
        context: envelope.context,
    })
}

/// Decodes the body of a bulk operation.
///
/// The API answers bulk writes with an array, but some endpoints wrap rows in
/// a list envelope or return a single object.
///
/// # Errors
///
/// Returns [`ResourceError::UnexpectedType`] or [`ResourceError::Deserialize`].
pub fn decode_many<T: Entity>(value: Value) -> Result<Vec<T>, ResourceError> {
    match value {
        Value::Array(items) => items.into_iter().map(decode_entity::<T>).collect(),
        other if other.get("rows").is_some() => decode_list::<T>(other).map(|list| list.rows),
        other if other.as_object().is_some_and(serde_json::Map::is_empty) => Ok(Vec::new()),
        other => decode_entity::<T>(other).map(|entity| vec![entity]),
    }
}

/// Decodes a payload that is not an entity, such as a report row or the
/// account context.
///
/// # Errors
///
/// Returns [`ResourceError::Deserialize`] attributed to `resource`.
pub fn decode_as<D: DeserializeOwned>(value: Value, resource: &'static str) -> Result<D, ResourceError> {
    serde_json::from_value(value).map_err(|source| ResourceError::Deserialize { resource, source })
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
