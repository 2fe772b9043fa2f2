//! Repositories for the goods catalog.

use std::ops::Deref;
use std::sync::Arc;

use serde_json::json;

use crate::clients::RestClient;
use crate::query::QueryBuilder;
use crate::rest::resources::{
    Currency, Price, PriceType, Product, ProductFolder, StockRow, Uom, Variant, STOCK_ALL_PATH,
};
use crate::rest::{
    decode_as, decode_entity, params, EntityRepository, ListResponse, ResourceError,
    ResourceResponse,
};

/// Units of measure need no extra calls.
pub type UomRepository = EntityRepository<Uom>;

#[derive(Debug, Clone)]
pub struct ProductRepository {
    inner: EntityRepository<Product>,
}

impl ProductRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the stock report row of one product, if the report lists it.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn stock(&self, id: &str) -> Result<Option<StockRow>, ResourceError> {
        let query = QueryBuilder::new().filter_eq("product", self.meta_for(id).href);
        let response = self
            .client()
            .get(STOCK_ALL_PATH, params(Some(&query)))
            .await
            .map_err(|e| self.error(e, Some(id)))?;
        let report: ListResponse<StockRow> = decode_as(response.body, "StockRow")?;
        Ok(report.rows.into_iter().next())
    }

    /// Finds the first product carrying `barcode`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, ResourceError> {
        let query = QueryBuilder::new().filter_eq("barcodes", barcode);
        self.find_first(Some(&query)).await
    }

    /// Replaces the sale prices of a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the product does not exist.
    pub async fn update_prices(&self, id: &str, prices: &[Price]) -> Result<Product, ResourceError> {
        let prices = self.serialize(prices)?;
        self.patch(id, json!({ "salePrices": prices })).await
    }
}

impl Deref for ProductRepository {
    type Target = EntityRepository<Product>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Clone)]
pub struct ProductFolderRepository {
    inner: EntityRepository<ProductFolder>,
}

impl ProductFolderRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Lists products placed directly in a folder.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn products(
        &self,
        folder_id: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError> {
        let query = query
            .cloned()
            .unwrap_or_default()
            .filter_eq("productFolder", self.meta_for(folder_id).href);
        EntityRepository::<Product>::new(Arc::clone(self.client()))
            .find_all(Some(&query))
            .await
    }
}

impl Deref for ProductFolderRepository {
    type Target = EntityRepository<ProductFolder>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Clone)]
pub struct VariantRepository {
    inner: EntityRepository<Variant>,
}

impl VariantRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Lists every variant of a product.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_product(&self, product_id: &str) -> Result<Vec<Variant>, ResourceError> {
        let query = QueryBuilder::new().filter_eq("productid", product_id);
        self.fetch_all(Some(&query)).await
    }
}

impl Deref for VariantRepository {
    type Target = EntityRepository<Variant>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Clone)]
pub struct CurrencyRepository {
    inner: EntityRepository<Currency>,
}

impl CurrencyRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the account's accounting currency.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no active currency is marked as
    /// default.
    pub async fn default_currency(&self) -> Result<Currency, ResourceError> {
        let query = QueryBuilder::new()
            .filter_eq("default", true)
            .filter_eq("archived", false);
        self.find_first(Some(&query))
            .await?
            .ok_or_else(|| ResourceError::NotFound {
                resource: "Currency",
                id: "default".to_string(),
                message: "no default currency".to_string(),
            })
    }
}

impl Deref for CurrencyRepository {
    type Target = EntityRepository<Currency>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Clone)]
pub struct PriceTypeRepository {
    inner: EntityRepository<PriceType>,
}

impl PriceTypeRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the default sale price type (`GET {path}/default`).
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn default_price_type(&self) -> Result<PriceType, ResourceError> {
        let response = self
            .client()
            .get(&format!("{}/default", self.path()), None)
            .await
            .map_err(|e| self.error(e, Some("default")))?;
        decode_entity(response.body)
    }
}

impl Deref for PriceTypeRepository {
    type Target = EntityRepository<PriceType>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
