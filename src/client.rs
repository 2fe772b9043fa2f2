//! The [`MoySklad`] facade.
//!
//! One transport is built from the configuration and shared by every
//! repository through an `Arc`. Repositories are public fields; account-wide
//! calls (context, audit, global search) are methods.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{RestClient, RestError};
use crate::config::MoySkladConfig;
use crate::error::ConfigError;
use crate::query::QueryBuilder;
use crate::repositories::{
    AssortmentRepository, BundleRepository, CashInRepository, CashOutRepository,
    CounterpartyRepository, CurrencyRepository, CustomEntityRepository, CustomerOrderRepository,
    DemandRepository, EmployeeRepository, GroupRepository, InvoiceOutRepository,
    OrganizationRepository, PaymentInRepository, PaymentOutRepository, PriceTypeRepository,
    ProductFolderRepository, ProductRepository, PurchaseOrderRepository, ServiceRepository,
    StockReportRepository, StoreRepository, SupplyRepository, UomRepository, VariantRepository,
    WebhookRepository, WebhookStockRepository,
};
use crate::rest::resources::{CustomEntity, EntityMetadata};
use crate::rest::{decode_as, params, Entity, EntityRepository, ResourceError};

/// Path of the audit log.
pub const AUDIT_PATH: &str = "audit";

/// Path of the global search across entity types.
pub const SEARCH_PATH: &str = "entity/search";

/// Path of the account context.
pub const CONTEXT_PATH: &str = "context";

/// Errors raised while building a [`MoySklad`] client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration is incomplete or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The transport could not be created.
    #[error(transparent)]
    Rest(#[from] RestError),
}

/// Client for the MoySklad JSON API 1.2.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::{Credentials, MoySklad, MoySkladConfig};
/// use moysklad_api::rest::resources::Counterparty;
///
/// let config = MoySkladConfig::builder()
///     .credentials(Credentials::token("token")?)
///     .build()?;
/// let client = MoySklad::new(config)?;
///
/// let me = client.employees.current().await?;
/// let orders = client.customer_orders.find_all(None).await?;
/// let hits = client.search("Acme").await?;
///
/// // Any entity type, including ones defined outside this crate
/// let counterparties = client.repository::<Counterparty>();
/// ```
#[derive(Debug, Clone)]
pub struct MoySklad {
    config: MoySkladConfig,
    client: Arc<RestClient>,

    pub products: ProductRepository,
    pub product_folders: ProductFolderRepository,
    pub variants: VariantRepository,
    pub uoms: UomRepository,
    pub currencies: CurrencyRepository,
    pub price_types: PriceTypeRepository,

    pub assortment: AssortmentRepository,
    pub services: ServiceRepository,
    pub bundles: BundleRepository,

    pub customer_orders: CustomerOrderRepository,
    pub purchase_orders: PurchaseOrderRepository,
    pub invoices_out: InvoiceOutRepository,
    pub demands: DemandRepository,
    pub supplies: SupplyRepository,
    pub cash_ins: CashInRepository,
    pub cash_outs: CashOutRepository,
    pub payment_ins: PaymentInRepository,
    pub payment_outs: PaymentOutRepository,

    pub counterparties: CounterpartyRepository,

    pub organizations: OrganizationRepository,
    pub employees: EmployeeRepository,
    pub stores: StoreRepository,
    pub groups: GroupRepository,

    pub custom_entities: CustomEntityRepository,
    pub webhooks: WebhookRepository,
    pub webhook_stocks: WebhookStockRepository,
    pub stock: StockReportRepository,
}

// Verify MoySklad is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MoySklad>();
};

impl MoySklad {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(config: MoySkladConfig) -> Result<Self, RestError> {
        let client = Arc::new(RestClient::new(&config)?);
        tracing::debug!(base_url = %config.base_url(), "MoySklad client ready");

        Ok(Self {
            products: ProductRepository::new(Arc::clone(&client)),
            product_folders: ProductFolderRepository::new(Arc::clone(&client)),
            variants: VariantRepository::new(Arc::clone(&client)),
            uoms: UomRepository::new(Arc::clone(&client)),
            currencies: CurrencyRepository::new(Arc::clone(&client)),
            price_types: PriceTypeRepository::new(Arc::clone(&client)),

            assortment: AssortmentRepository::new(Arc::clone(&client)),
            services: ServiceRepository::new(Arc::clone(&client)),
            bundles: BundleRepository::new(Arc::clone(&client)),

            customer_orders: CustomerOrderRepository::new(Arc::clone(&client)),
            purchase_orders: PurchaseOrderRepository::new(Arc::clone(&client)),
            invoices_out: InvoiceOutRepository::new(Arc::clone(&client)),
            demands: DemandRepository::new(Arc::clone(&client)),
            supplies: SupplyRepository::new(Arc::clone(&client)),
            cash_ins: CashInRepository::new(Arc::clone(&client)),
            cash_outs: CashOutRepository::new(Arc::clone(&client)),
            payment_ins: PaymentInRepository::new(Arc::clone(&client)),
            payment_outs: PaymentOutRepository::new(Arc::clone(&client)),

            counterparties: CounterpartyRepository::new(Arc::clone(&client)),

            organizations: OrganizationRepository::new(Arc::clone(&client)),
            employees: EmployeeRepository::new(Arc::clone(&client)),
            stores: StoreRepository::new(Arc::clone(&client)),
            groups: GroupRepository::new(Arc::clone(&client)),

            custom_entities: CustomEntityRepository::new(Arc::clone(&client)),
            webhooks: WebhookRepository::new(Arc::clone(&client)),
            webhook_stocks: WebhookStockRepository::new(Arc::clone(&client)),
            stock: StockReportRepository::new(Arc::clone(&client)),

            config,
            client,
        })
    }

    /// Creates a client from `MOYSKLAD_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if no credentials are set.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = MoySkladConfig::from_env()?;
        Ok(Self::new(config)?)
    }

    /// Returns the configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &MoySkladConfig {
        &self.config
    }

    /// Returns the shared REST client.
    #[must_use]
    pub fn rest_client(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Returns a repository for any entity type.
    #[must_use]
    pub fn repository<T: Entity>(&self) -> EntityRepository<T> {
        EntityRepository::new(Arc::clone(&self.client))
    }

    /// Fetches the account context (`GET context`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Authentication`] if the credentials are
    /// rejected.
    pub async fn context(&self) -> Result<Value, ResourceError> {
        self.get_raw(CONTEXT_PATH, None, "Context").await
    }

    /// Fetches the metadata of the entity type at `path`
    /// (e.g., `entity/customerorder`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for unknown paths.
    pub async fn metadata(&self, path: &str) -> Result<EntityMetadata, ResourceError> {
        let path = format!("{}/metadata", path.trim_matches('/'));
        let body = self.get_raw(&path, None, "EntityMetadata").await?;
        decode_as(body, "EntityMetadata")
    }

    /// Lists audit records.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn audit(&self, query: Option<&QueryBuilder>) -> Result<Value, ResourceError> {
        self.get_raw(AUDIT_PATH, query, "Audit").await
    }

    /// Lists the events of one audit record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the record does not exist.
    pub async fn audit_events(
        &self,
        audit_id: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<Value, ResourceError> {
        let path = format!("{AUDIT_PATH}/{audit_id}/events");
        self.get_raw(&path, query, "AuditEvent").await
    }

    /// Searches every entity type at once.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn search(&self, text: &str) -> Result<Value, ResourceError> {
        let query = QueryBuilder::new().search(text);
        self.get_raw(SEARCH_PATH, Some(&query), "Search").await
    }

    /// Lists the account's dictionaries.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn custom_entities(&self) -> Result<Vec<CustomEntity>, ResourceError> {
        self.custom_entities.list().await
    }

    async fn get_raw(
        &self,
        path: &str,
        query: Option<&QueryBuilder>,
        resource: &'static str,
    ) -> Result<Value, ResourceError> {
        let response = self
            .client
            .get(path, params(query))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, resource, None))?;
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::rest::resources::Webhook;

    fn client() -> MoySklad {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .build()
            .unwrap();
        MoySklad::new(config).unwrap()
    }

    #[test]
    fn test_repositories_share_one_transport() {
        let client = client();
        assert!(Arc::ptr_eq(client.rest_client(), client.products.client()));
        assert!(Arc::ptr_eq(client.rest_client(), client.customer_orders.client()));
        assert!(Arc::ptr_eq(client.rest_client(), client.webhooks.client()));
    }

    #[test]
    fn test_generic_repository() {
        let client = client();
        assert_eq!(client.repository::<Webhook>().path(), "entity/webhook");
    }

    #[test]
    fn test_document_fields() {
        let client = client();
        assert_eq!(client.invoices_out.path(), "entity/invoiceout");
        assert_eq!(client.payment_outs.path(), "entity/paymentout");
        assert_eq!(client.stores.path(), "entity/store");
        assert_eq!(client.groups.path(), "entity/group");
    }
}
