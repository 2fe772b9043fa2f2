//! Dictionaries and their elements.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::RestClient;
use crate::query::QueryBuilder;
use crate::rest::resources::{CustomEntity, CustomEntityElement, CUSTOM_ENTITIES_METADATA_PATH};
use crate::rest::{decode_many, Entity, EntityRepository, ResourceError, ResourceResponse};

/// Dictionary definitions (`entity/customentity`) and their elements
/// (`entity/customentity/{dictionary_id}`).
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::rest::resources::CustomEntityElement;
///
/// let brands = client
///     .custom_entities
///     .list()
///     .await?
///     .into_iter()
///     .find(|d| d.name.as_deref() == Some("Brands"));
///
/// if let Some(id) = brands.and_then(|d| d.dictionary_id()) {
///     client
///         .custom_entities
///         .create_element(&id, &CustomEntityElement::named("Acme"))
///         .await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CustomEntityRepository {
    inner: EntityRepository<CustomEntity>,
}

impl CustomEntityRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the repository of one dictionary's elements.
    #[must_use]
    pub fn elements_of(&self, dictionary_id: &str) -> EntityRepository<CustomEntityElement> {
        EntityRepository::with_path(
            Arc::clone(self.client()),
            format!("{}/{dictionary_id}", CustomEntity::PATH),
        )
    }

    /// Lists every dictionary defined on the account.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn list(&self) -> Result<Vec<CustomEntity>, ResourceError> {
        let response = self
            .client()
            .get(CUSTOM_ENTITIES_METADATA_PATH, None)
            .await
            .map_err(|e| self.error(e, None))?;
        decode_many(response.body)
    }

    /// Lists the elements of a dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the dictionary does not exist.
    pub async fn elements(
        &self,
        dictionary_id: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<CustomEntityElement>>, ResourceError> {
        self.elements_of(dictionary_id).find_all(query).await
    }

    /// Adds an element to a dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// element.
    pub async fn create_element(
        &self,
        dictionary_id: &str,
        element: &CustomEntityElement,
    ) -> Result<CustomEntityElement, ResourceError> {
        self.elements_of(dictionary_id).create(element).await
    }

    /// Updates an element identified by its `id` or `meta.href`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the element has no id.
    pub async fn update_element(
        &self,
        dictionary_id: &str,
        element: &CustomEntityElement,
    ) -> Result<CustomEntityElement, ResourceError> {
        self.elements_of(dictionary_id).update(element).await
    }

    /// Removes an element.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the element does not exist.
    pub async fn delete_element(
        &self,
        dictionary_id: &str,
        element_id: &str,
    ) -> Result<(), ResourceError> {
        self.elements_of(dictionary_id).delete(element_id).await
    }
}

impl Deref for CustomEntityRepository {
    type Target = EntityRepository<CustomEntity>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::config::MoySkladConfig;

    #[test]
    fn test_elements_path() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .build()
            .unwrap();
        let repo = CustomEntityRepository::new(Arc::new(RestClient::new(&config).unwrap()));
        assert_eq!(repo.elements_of("d-1").path(), "entity/customentity/d-1");
    }
}
