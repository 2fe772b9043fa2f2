//! Document repositories.
//!
//! Every document type is served by [`DocumentRepository<T>`]. Lookups by
//! counterparty work for all documents; line management is available for
//! documents with goods lines ([`PositionedDocument`]).

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::clients::RestClient;
use crate::query::QueryBuilder;
use crate::repositories::single;
use crate::rest::resources::{
    CashIn, CashOut, Counterparty, CustomerOrder, Demand, Document, InvoiceOut, PaymentIn,
    PaymentOut, Position, PositionedDocument, PurchaseOrder, Supply,
};
use crate::rest::{Entity, EntityRepository, ResourceError, ResourceResponse};

pub type CustomerOrderRepository = DocumentRepository<CustomerOrder>;
pub type PurchaseOrderRepository = DocumentRepository<PurchaseOrder>;
pub type InvoiceOutRepository = DocumentRepository<InvoiceOut>;
pub type DemandRepository = DocumentRepository<Demand>;
pub type SupplyRepository = DocumentRepository<Supply>;
pub type CashInRepository = DocumentRepository<CashIn>;
pub type CashOutRepository = DocumentRepository<CashOut>;
pub type PaymentInRepository = DocumentRepository<PaymentIn>;
pub type PaymentOutRepository = DocumentRepository<PaymentOut>;

/// Repository of one document type.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::rest::resources::Position;
///
/// let orders = client.customer_orders.by_agent(&counterparty_id, None).await?;
/// let order_id = orders[0].document.id.clone().unwrap();
///
/// let line = Position::new(client.products.reference(&product_id), 1.0, 99_900.0);
/// client.customer_orders.add_positions(&order_id, &[line]).await?;
///
/// let lines = client.customer_orders.positions(&order_id, None).await?;
/// ```
pub struct DocumentRepository<T> {
    inner: EntityRepository<T>,
}

impl<T> Clone for DocumentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for DocumentRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRepository")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T: Document> DocumentRepository<T> {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Lists documents issued to or by a counterparty.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_agent(
        &self,
        agent_id: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
        let href = Counterparty::meta_for(self.base_url(), agent_id).href;
        let query = query.cloned().unwrap_or_default().filter_eq("agent", href);
        self.find_all(Some(&query)).await
    }
}

impl<T: PositionedDocument> DocumentRepository<T> {
    /// Returns the repository of one document's lines.
    #[must_use]
    pub fn positions_of(&self, document_id: &str) -> EntityRepository<Position> {
        self.nested::<Position>(document_id, Position::PATH)
            .with_type(T::POSITION_TYPE)
    }

    /// Lists the lines of a document.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the document does not exist.
    pub async fn positions(
        &self,
        document_id: &str,
        query: Option<&QueryBuilder>,
    ) -> Result<ResourceResponse<Vec<Position>>, ResourceError> {
        self.positions_of(document_id).find_all(query).await
    }

    /// Appends lines to a document and returns the stored lines.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects a
    /// line.
    pub async fn add_positions(
        &self,
        document_id: &str,
        positions: &[Position],
    ) -> Result<Vec<Position>, ResourceError> {
        self.positions_of(document_id).create_bulk(positions).await
    }

    /// Appends one line.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// line.
    pub async fn add_position(
        &self,
        document_id: &str,
        position: &Position,
    ) -> Result<Position, ResourceError> {
        single(
            self.add_positions(document_id, std::slice::from_ref(position))
                .await?,
        )
    }

    /// Changes one line; only the fields set in `position` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the line does not exist.
    pub async fn update_position(
        &self,
        document_id: &str,
        position_id: &str,
        position: &Position,
    ) -> Result<Position, ResourceError> {
        let lines = self.positions_of(document_id);
        let body = lines.serialize(position)?;
        lines.patch(position_id, body).await
    }

    /// Removes one line.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the line does not exist.
    pub async fn delete_position(
        &self,
        document_id: &str,
        position_id: &str,
    ) -> Result<(), ResourceError> {
        self.positions_of(document_id).delete(position_id).await
    }
}

impl DocumentRepository<CustomerOrder> {
    /// Returns the counterparty of an order.
    ///
    /// Without `expand` only the counterparty's `meta` is filled in; with it
    /// the order is read with `expand=agent` and every field is decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the order does not exist or has
    /// no agent.
    pub async fn agent(
        &self,
        order_id: &str,
        expand: bool,
    ) -> Result<Counterparty, ResourceError> {
        let query = expand.then(|| QueryBuilder::new().expand(["agent"]));
        let order = self.find_by_id(order_id, query.as_ref()).await?.into_inner();
        let agent = order.document.agent.ok_or_else(|| ResourceError::NotFound {
            resource: CustomerOrder::NAME,
            id: order_id.to_string(),
            message: "order has no agent".to_string(),
        })?;
        agent
            .expanded_as()
            .map_err(|source| ResourceError::Deserialize {
                resource: Counterparty::NAME,
                source,
            })
    }
}

impl DocumentRepository<PaymentIn> {
    /// Lists incoming payments linked to a customer order.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_customer_order(&self, order_id: &str) -> Result<Vec<PaymentIn>, ResourceError> {
        let query = QueryBuilder::new().filter_eq("operations.customerorder.id", order_id);
        self.fetch_all(Some(&query)).await
    }
}

impl DocumentRepository<InvoiceOut> {
    /// Lists invoices issued for a customer order.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_customer_order(&self, order_id: &str) -> Result<Vec<InvoiceOut>, ResourceError> {
        let href = CustomerOrder::meta_for(self.base_url(), order_id).href;
        let query = QueryBuilder::new().filter_eq("customerOrder", href);
        self.fetch_all(Some(&query)).await
    }
}

impl DocumentRepository<Demand> {
    /// Lists shipments made for a customer order.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn by_customer_order(&self, order_id: &str) -> Result<Vec<Demand>, ResourceError> {
        let href = CustomerOrder::meta_for(self.base_url(), order_id).href;
        let query = QueryBuilder::new().filter_eq("customerOrder", href);
        self.fetch_all(Some(&query)).await
    }
}

impl<T> Deref for DocumentRepository<T> {
    type Target = EntityRepository<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

// Verify DocumentRepository is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CustomerOrderRepository>();
};
