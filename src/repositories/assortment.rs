//! Assortment, services and bundles.
//!
//! The assortment endpoint lists products, variants, services and bundles
//! together; rows keep their own `meta.type`.

use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::RestClient;
use crate::query::QueryBuilder;
use crate::repositories::single;
use crate::rest::resources::{
    Assortment, AssortmentSettings, Bundle, BundleComponent, ProductFolder, Service,
};
use crate::rest::{decode_as, Entity, EntityRepository, ResourceError, ResourceResponse};

pub type ServiceRepository = EntityRepository<Service>;

/// Read access to `entity/assortment`.
///
/// # Example
///
/// ```rust,ignore
/// let page = client.assortment.by_barcode("4601234567890").await?;
/// for row in page.iter().filter(|row| row.is_variant()) {
///     println!("{:?} {:?}", row.name, row.stock);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AssortmentRepository {
    inner: EntityRepository<Assortment>,
}

impl AssortmentRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Lists the assortment of a product folder, optionally descending into
    /// its subfolders.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_product_folder(
        &self,
        folder_id: &str,
        with_subfolders: bool,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        let href = ProductFolder::meta_for(self.base_url(), folder_id).href;
        let query = query
            .cloned()
            .unwrap_or_default()
            .filter_eq("productFolder", href)
            .filter_eq("withSubFolders", with_subfolders);
        self.find_all(Some(&query)).await
    }

    /// Lists rows carrying `barcode`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_barcode(
        &self,
        barcode: &str,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        let query = QueryBuilder::new().filter_eq("barcode", barcode);
        self.find_all(Some(&query)).await
    }

    /// Full-text search over names, codes and articles.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn search_by_name(
        &self,
        text: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        let query = query.cloned().unwrap_or_default().search(text);
        self.find_all(Some(&query)).await
    }

    /// Lists rows of one kind (`product`, `variant`, `service`, `bundle`,
    /// `consignment`).
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_type(
        &self,
        entity_type: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        let query = query.cloned().unwrap_or_default().filter_eq("type", entity_type);
        self.find_all(Some(&query)).await
    }

    /// Lists products only.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn products(
        &self,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        self.by_type("product", query).await
    }

    /// Lists variants only.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn variants(
        &self,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        self.by_type("variant", query).await
    }

    /// Lists services only.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn services(
        &self,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        self.by_type("service", query).await
    }

    /// Lists bundles only.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn bundles(
        &self,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Assortment>>, ResourceError> {
        self.by_type("bundle", query).await
    }

    /// Fetches the account's barcode and unique code settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn settings(&self) -> Result<AssortmentSettings, ResourceError> {
        let response = self
            .client()
            .get(&format!("{}/settings", self.path()), None)
            .await
            .map_err(|e| self.error(e, None))?;
        decode_as(response.body, "AssortmentSettings")
    }

    /// Fetches the stock summary of one assortment item
    /// (`GET {path}/{id}/stock`).
    ///
    /// The shape depends on the item type, so the body is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the item does not exist.
    pub async fn stock(&self, assortment_id: &str) -> Result<Value, ResourceError> {
        let response = self
            .client()
            .get(&format!("{}/{assortment_id}/stock", self.path()), None)
            .await
            .map_err(|e| self.error(e, Some(assortment_id)))?;
        Ok(response.body)
    }
}

impl Deref for AssortmentRepository {
    type Target = EntityRepository<Assortment>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Clone)]
pub struct BundleRepository {
    inner: EntityRepository<Bundle>,
}

impl BundleRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the repository of one bundle's components.
    #[must_use]
    pub fn components_of(&self, bundle_id: &str) -> EntityRepository<BundleComponent> {
        self.nested(bundle_id, BundleComponent::PATH)
    }

    /// Lists the components of a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the bundle does not exist.
    pub async fn components(
        &self,
        bundle_id: &str,
    ) -> Result<ResourceResponse<Vec<BundleComponent>>, ResourceError> {
        self.components_of(bundle_id).find_all(None).await
    }

    /// Adds a component to a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// component.
    pub async fn add_component(
        &self,
        bundle_id: &str,
        component: &BundleComponent,
    ) -> Result<BundleComponent, ResourceError> {
        single(
            self.components_of(bundle_id)
                .create_bulk(std::slice::from_ref(component))
                .await?,
        )
    }

    /// Changes the quantity or assortment of a component.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the component does not exist.
    pub async fn update_component(
        &self,
        bundle_id: &str,
        component_id: &str,
        component: &BundleComponent,
    ) -> Result<BundleComponent, ResourceError> {
        let components = self.components_of(bundle_id);
        let body = components.serialize(component)?;
        components.patch(component_id, body).await
    }

    /// Removes a component from a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the component does not exist.
    pub async fn delete_component(
        &self,
        bundle_id: &str,
        component_id: &str,
    ) -> Result<(), ResourceError> {
        self.components_of(bundle_id).delete(component_id).await
    }
}

impl Deref for BundleRepository {
    type Target = EntityRepository<Bundle>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::config::MoySkladConfig;

    fn client() -> Arc<RestClient> {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .build()
            .unwrap();
        Arc::new(RestClient::new(&config).unwrap())
    }

    #[test]
    fn test_assortment_paths() {
        let client = client();
        assert_eq!(AssortmentRepository::new(Arc::clone(&client)).path(), "entity/assortment");
        assert_eq!(ServiceRepository::new(Arc::clone(&client)).path(), "entity/service");
        assert_eq!(
            BundleRepository::new(client).components_of("b-1").path(),
            "entity/bundle/b-1/components"
        );
    }
}
