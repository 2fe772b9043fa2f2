//! Generic CRUD repository shared by every entity type.
//!
//! [`EntityRepository<T>`] maps each operation to one request against the
//! entity's resource path:
//!
//! | Operation | Request |
//! |---|---|
//! | `find_all` | `GET {path}` |
//! | `fetch_all` | `GET {path}`, then `GET meta.nextHref` until absent |
//! | `find_by_id` | `GET {path}/{id}` |
//! | `create` | `POST {path}` |
//! | `update` | `PUT {path}/{id}` |
//! | `delete` | `DELETE {path}/{id}` |
//! | `create_bulk` / `update_bulk` | `POST {path}` with an array |
//! | `delete_bulk` | `POST {path}/delete` with `[{"meta": ...}]` |
//! | `metadata` | `GET {path}/metadata` |
//!
//! Per-entity repositories in [`crate::repositories`] wrap this type and
//! `Deref` to it.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{QueryParams, RestClient, RestError};
use crate::config::BaseUrl;
use crate::query::QueryBuilder;
use crate::rest::resources::EntityMetadata;
use crate::rest::response::{decode_entity, decode_list, decode_many};
use crate::rest::{Entity, EntityRef, Meta, ResourceError, ResourceResponse};

/// CRUD operations for one entity type.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::query::Filter;
/// use moysklad_api::rest::resources::Product;
///
/// let repo = client.repository::<Product>();
///
/// let query = repo.query().filter(Filter::new().eq("archived", false)).limit(100);
/// let page = repo.find_all(Some(&query)).await?;
/// let everything = repo.fetch_all(Some(&query)).await?;
///
/// let mut product = repo.find_by_id(&page[0].id.clone().unwrap(), None).await?.into_inner();
/// product.description = Some("Updated".to_string());
/// let product = repo.update(&product).await?;
/// ```
pub struct EntityRepository<T> {
    client: Arc<RestClient>,
    path: Cow<'static, str>,
    entity_type: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityRepository<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            path: self.path.clone(),
            entity_type: self.entity_type,
            _entity: PhantomData,
        }
    }
}

impl<T> fmt::Debug for EntityRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRepository")
            .field("path", &self.path)
            .field("entity_type", &self.entity_type)
            .finish_non_exhaustive()
    }
}

// Verify EntityRepository is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EntityRepository<Value>>();
};

impl<T: Entity> EntityRepository<T> {
    /// Creates a repository serving `T::PATH`.
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self::with_path(client, T::PATH)
    }

    /// Creates a repository serving a custom path.
    ///
    /// Used for nested collections such as `entity/customerorder/{id}/positions`
    /// and custom entity elements.
    #[must_use]
    pub fn with_path(client: Arc<RestClient>, path: impl Into<Cow<'static, str>>) -> Self {
        let path = path.into();
        let path = match path {
            Cow::Borrowed(p) => Cow::Borrowed(p.trim_matches('/')),
            Cow::Owned(p) => Cow::Owned(p.trim_matches('/').to_string()),
        };
        Self {
            client,
            path,
            entity_type: T::TYPE,
            _entity: PhantomData,
        }
    }

    /// Overrides the `meta.type` written into references built by this
    /// repository.
    ///
    /// Document lines share one Rust type but the API types them per
    /// document (`customerorderposition`, `demandposition`, ...).
    #[must_use]
    pub fn with_type(mut self, entity_type: &'static str) -> Self {
        self.entity_type = entity_type;
        self
    }

    /// Returns a repository for a collection nested under one of this
    /// repository's entities: `{path}/{id}/{segment}`.
    #[must_use]
    pub fn nested<S: Entity>(&self, id: &str, segment: &str) -> EntityRepository<S> {
        EntityRepository::with_path(
            Arc::clone(&self.client),
            format!("{}/{id}/{}", self.path, segment.trim_matches('/')),
        )
    }

    /// Returns the resource path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the `meta.type` used for references built by this repository.
    #[must_use]
    pub const fn entity_type(&self) -> &'static str {
        self.entity_type
    }

    /// Returns the shared REST client.
    #[must_use]
    pub fn client(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Returns the API root URL.
    #[must_use]
    pub fn base_url(&self) -> &BaseUrl {
        self.client.base_url()
    }

    /// Creates an empty query for this entity.
    #[must_use]
    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Builds the meta of `{base}/{path}/{id}`.
    #[must_use]
    pub fn meta_for(&self, id: &str) -> Meta {
        Meta::for_entity(self.base_url(), &self.path, id, self.entity_type)
    }

    /// Builds a `{"meta": ...}` reference to `{base}/{path}/{id}`.
    #[must_use]
    pub fn reference(&self, id: &str) -> EntityRef {
        EntityRef::from(self.meta_for(id))
    }

    /// Lists one page of entities.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status, or
    /// [`ResourceError::UnexpectedType`] if a row belongs to another entity.
    pub async fn find_all(
        &self,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
        let response = self
            .client
            .get(&self.path, params(query))
            .await
            .map_err(|e| self.error(e, None))?;
        ResourceResponse::from_list_response(response)
    }

    /// Lists every matching entity, following `meta.nextHref` across pages.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any page request.
    pub async fn fetch_all(&self, query: Option<&QueryBuilder>) -> Result<Vec<T>, ResourceError> {
        let first = self.find_all(query).await?;
        let mut next = first.next_href().map(str::to_string);
        let mut rows = first.into_inner();

        while let Some(href) = next.take() {
            tracing::debug!(path = %self.path, fetched = rows.len(), "fetching next page");
            let response = self
                .client
                .get_url(&href)
                .await
                .map_err(|e| self.error(e, None))?;
            let page = decode_list::<T>(response.body)?;
            if page.rows.is_empty() {
                break;
            }
            rows.extend(page.rows);
            next = page.meta.next_href;
        }

        Ok(rows)
    }

    /// Fetches one entity.
    ///
    /// The query is used for `expand` and other read parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity does not exist.
    pub async fn find_by_id(
        &self,
        id: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<T>, ResourceError> {
        let response = self
            .client
            .get(&self.item_path(id), params(query))
            .await
            .map_err(|e| self.error(e, Some(id)))?;
        ResourceResponse::from_entity_response(response)
    }

    /// Returns the first entity matching the query, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn find_first(&self, query: Option<&QueryBuilder>) -> Result<Option<T>, ResourceError> {
        let query = query.cloned().unwrap_or_default().limit(1);
        let page = self.find_all(Some(&query)).await?;
        Ok(page.into_inner().into_iter().next())
    }

    /// Creates an entity and returns the server's copy (with `id` and `meta`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// payload.
    pub async fn create(&self, entity: &T) -> Result<T, ResourceError> {
        let body = self.to_body(entity)?;
        let response = self
            .client
            .post(&self.path, body, None)
            .await
            .map_err(|e| self.error(e, None))?;
        decode_entity(response.body)
    }

    /// Updates an existing entity.
    ///
    /// The id is taken from `id`, or from `meta.href`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the entity has no id, or
    /// [`ResourceError::NotFound`] if it no longer exists.
    pub async fn update(&self, entity: &T) -> Result<T, ResourceError> {
        let id = entity
            .entity_id()
            .ok_or(ResourceError::MissingId { resource: T::NAME })?;
        let body = self.to_body(entity)?;
        self.put(&id, body).await
    }

    /// Sends a partial update built by hand.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity does not exist.
    pub async fn patch(&self, id: &str, changes: Value) -> Result<T, ResourceError> {
        self.put(id, changes).await
    }

    /// Deletes an entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity does not exist.
    pub async fn delete(&self, id: &str) -> Result<(), ResourceError> {
        self.client
            .delete(&self.item_path(id), None)
            .await
            .map_err(|e| self.error(e, Some(id)))?;
        Ok(())
    }

    /// Creates several entities in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if any entity is rejected.
    pub async fn create_bulk(&self, entities: &[T]) -> Result<Vec<T>, ResourceError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }
        let body = entities
            .iter()
            .map(|entity| self.to_body(entity))
            .collect::<Result<Vec<_>, _>>()?;
        self.post_many(Value::Array(body)).await
    }

    /// Updates several entities in one request.
    ///
    /// Every entity needs an id; entities without a `meta` get one built from
    /// the id so the server can tell them apart from new entities.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if any entity lacks an id. Nothing
    /// is sent in that case.
    pub async fn update_bulk(&self, entities: &[T]) -> Result<Vec<T>, ResourceError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }
        let mut body = Vec::with_capacity(entities.len());
        for entity in entities {
            let id = entity
                .entity_id()
                .ok_or(ResourceError::MissingId { resource: T::NAME })?;
            let mut value = self.to_body(entity)?;
            if let Value::Object(object) = &mut value {
                if !object.contains_key("meta") {
                    let meta = serde_json::to_value(self.meta_for(&id)).map_err(|source| {
                        ResourceError::Serialize {
                            resource: T::NAME,
                            source,
                        }
                    })?;
                    object.insert("meta".to_string(), meta);
                }
            }
            body.push(value);
        }
        self.post_many(Value::Array(body)).await
    }

    /// Deletes several entities in one request.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn delete_bulk<I, S>(&self, ids: I) -> Result<(), ResourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let refs: Vec<EntityRef> = ids
            .into_iter()
            .map(|id| self.reference(id.as_ref()))
            .collect();
        if refs.is_empty() {
            return Ok(());
        }
        let body = self.serialize(&refs)?;
        self.client
            .post(&format!("{}/delete", self.path), body, None)
            .await
            .map_err(|e| self.error(e, None))?;
        Ok(())
    }

    /// Fetches the entity type's metadata (attribute definitions, states).
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn metadata(&self) -> Result<EntityMetadata, ResourceError> {
        let response = self
            .client
            .get(&format!("{}/metadata", self.path), None)
            .await
            .map_err(|e| self.error(e, None))?;
        serde_json::from_value(response.body).map_err(|source| ResourceError::Deserialize {
            resource: T::NAME,
            source,
        })
    }

    /// Maps a client error, attributing it to this entity type.
    #[must_use]
    pub fn error(&self, error: RestError, id: Option<&str>) -> ResourceError {
        ResourceError::from_rest_error(error, T::NAME, id)
    }

    /// Serializes a value into a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] on failure.
    pub fn serialize<B: Serialize + ?Sized>(&self, value: &B) -> Result<Value, ResourceError> {
        serde_json::to_value(value).map_err(|source| ResourceError::Serialize {
            resource: T::NAME,
            source,
        })
    }

    fn to_body(&self, entity: &T) -> Result<Value, ResourceError> {
        self.serialize(entity)
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{id}", self.path)
    }

    async fn put(&self, id: &str, body: Value) -> Result<T, ResourceError> {
        let response = self
            .client
            .put(&self.item_path(id), body, None)
            .await
            .map_err(|e| self.error(e, Some(id)))?;
        decode_entity(response.body)
    }

    async fn post_many(&self, body: Value) -> Result<Vec<T>, ResourceError> {
        let response = self
            .client
            .post(&self.path, body, None)
            .await
            .map_err(|e| self.error(e, None))?;
        decode_many(response.body)
    }
}

/// Converts an optional query into request parameters.
#[must_use]
pub fn params(query: Option<&QueryBuilder>) -> Option<QueryParams> {
    query.map(QueryBuilder::to_params).filter(|p| !p.is_empty())
}
