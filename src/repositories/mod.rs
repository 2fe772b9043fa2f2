//! Per-entity repositories.
//!
//! Each repository wraps an [`EntityRepository`] for its entity type and
//! dereferences to it, so the generic CRUD and bulk operations are always
//! available next to the entity-specific ones. Entities that need nothing
//! beyond CRUD are served by a type alias.

mod assortment;
mod counterparty;
mod custom;
mod documents;
mod organization;
mod products;
mod stock;

pub use assortment::{AssortmentRepository, BundleRepository, ServiceRepository};
pub use counterparty::CounterpartyRepository;
pub use custom::CustomEntityRepository;
pub use documents::{
    CashInRepository, CashOutRepository, CustomerOrderRepository, DemandRepository,
    DocumentRepository, InvoiceOutRepository, PaymentInRepository, PaymentOutRepository,
    PurchaseOrderRepository, SupplyRepository,
};
pub use organization::{
    EmployeeRepository, GroupRepository, OrganizationRepository, StoreRepository,
    CURRENT_EMPLOYEE_PATH,
};
pub use products::{
    CurrencyRepository, PriceTypeRepository, ProductFolderRepository, ProductRepository,
    UomRepository, VariantRepository,
};
pub use stock::StockReportRepository;

use crate::rest::resources::{Webhook, WebhookStock};
use crate::rest::{Entity, EntityRepository, ResourceError};

pub type WebhookRepository = EntityRepository<Webhook>;
pub type WebhookStockRepository = EntityRepository<WebhookStock>;

/// Takes the only entity out of a one-element bulk response.
pub(crate) fn single<T: Entity>(created: Vec<T>) -> Result<T, ResourceError> {
    created
        .into_iter()
        .next()
        .ok_or_else(|| ResourceError::Deserialize {
            resource: T::NAME,
            source: serde::de::Error::custom("empty response body"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::ContactPerson;

    #[test]
    fn test_single_takes_first() {
        let person = ContactPerson {
            id: Some("p".to_string()),
            ..ContactPerson::default()
        };
        assert_eq!(single(vec![person]).unwrap().id.as_deref(), Some("p"));
    }

    #[test]
    fn test_single_rejects_empty() {
        let error = single::<ContactPerson>(Vec::new()).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::Deserialize {
                resource: "ContactPerson",
                ..
            }
        ));
    }
}
