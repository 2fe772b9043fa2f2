//! Stock reports.

use std::sync::Arc;

use crate::clients::{HttpResponse, RestClient};
use crate::query::QueryBuilder;
use crate::rest::resources::{
    Store, StockByStoreRow, StockRow, STOCK_ALL_PATH, STOCK_BY_STORE_PATH,
};
use crate::rest::{
    decode_as, params, Entity, ListResponse, ResourceError, ResourceResponse,
};

/// Read access to `report/stock/*`.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::query::Filter;
///
/// let query = client
///     .stock
///     .query()
///     .filter(Filter::new().eq("stockMode", "positiveOnly"));
/// for row in client.stock.all(Some(&query)).await?.iter() {
///     println!("{:?}: {}", row.name, row.available());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StockReportRepository {
    client: Arc<RestClient>,
}

impl StockReportRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Creates an empty report query.
    #[must_use]
    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Lists stock across all warehouses, one row per assortment item.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn all(
        &self,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<StockRow>>, ResourceError> {
        let response = self.fetch(STOCK_ALL_PATH, query).await?;
        rows_response(response, "StockRow")
    }

    /// Lists stock held in one warehouse, given the warehouse's `meta.href`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_store(
        &self,
        store_href: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<StockRow>>, ResourceError> {
        let query = query.cloned().unwrap_or_default().filter_eq("store", store_href);
        self.all(Some(&query)).await
    }

    /// Same as [`by_store`](Self::by_store), building the href from an id.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_store_id(
        &self,
        store_id: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<StockRow>>, ResourceError> {
        let href = Store::meta_for(self.client.base_url(), store_id).href;
        self.by_store(&href, query).await
    }

    /// Lists stock split by warehouse.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn per_store(
        &self,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<StockByStoreRow>>, ResourceError> {
        let response = self.fetch(STOCK_BY_STORE_PATH, query).await?;
        rows_response(response, "StockByStoreRow")
    }

    async fn fetch(
        &self,
        path: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<HttpResponse, ResourceError> {
        self.client
            .get(path, params(query))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, "StockReport", None))
    }
}

fn rows_response<R: serde::de::DeserializeOwned>(
    response: HttpResponse,
    resource: &'static str,
) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
    let request_id = response.request_id().map(ToString::to_string);
    let rate_limit = response.rate_limit;
    let report: ListResponse<R> = decode_as(response.body, resource)?;
    Ok(ResourceResponse::new(
        report.rows,
        Some(report.meta),
        rate_limit,
        request_id,
    ))
}
