//! Trade and cash documents.
//!
//! Every document shares [`DocumentFields`] (flattened into the document
//! struct) and implements [`Document`]. Documents with goods lines also
//! implement [`PositionedDocument`]; their lines live in the nested collection
//! `{path}/{id}/positions`.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad_api::rest::resources::{CustomerOrder, Position};
//! use moysklad_api::rest::Entity;
//!
//! let mut order = CustomerOrder::default();
//! order.document.organization = Some(organization_ref);
//! order.document.agent = Some(counterparty_ref);
//! order.positions = Some(vec![Position::new(product_ref, 2.0, 150_000.0)].into());
//!
//! let order = client.customer_orders.create(&order).await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::BaseUrl;
use crate::rest::{datetime, Attribute, Entity, EntityRef, HasAttributes, Meta};

use super::common::Address;
use super::enums::{StateType, TaxSystem};

/// Currency rate of a document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Rate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Fields every document carries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<EntityRef>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub created: Option<NaiveDateTime>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub updated: Option<NaiveDateTime>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub deleted: Option<NaiveDateTime>,
    /// Document number; assigned by the server when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub moment: Option<NaiveDateTime>,
    /// `false` keeps the document as a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
    /// Total in minor currency units; computed by the server.
    #[serde(skip_serializing)]
    pub sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_account: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_account: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing)]
    pub files: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub printed: Option<bool>,
    #[serde(skip_serializing)]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
}

/// A document entity.
pub trait Document: Entity {
    /// Returns the shared document fields.
    fn fields(&self) -> &DocumentFields;

    /// Returns the shared document fields for modification.
    fn fields_mut(&mut self) -> &mut DocumentFields;
}

/// A document with goods lines.
pub trait PositionedDocument: Document {
    /// `meta.type` of this document's lines (e.g. `customerorderposition`).
    const POSITION_TYPE: &'static str;

    /// Returns the embedded lines, if present.
    fn positions(&self) -> Option<&Positions>;
}

/// One goods line of a document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit price in minor currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Discount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assortment: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub shipped: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<f64>,
}

impl Position {
    /// Creates a line for `quantity` units of an assortment item at `price`.
    #[must_use]
    pub fn new(assortment: EntityRef, quantity: f64, price: f64) -> Self {
        Self {
            assortment: Some(assortment),
            quantity: Some(quantity),
            price: Some(price),
            ..Self::default()
        }
    }

    /// Returns `quantity * price` minus the discount.
    #[must_use]
    pub fn total(&self) -> f64 {
        let gross = self.quantity.unwrap_or_default() * self.price.unwrap_or_default();
        gross * (1.0 - self.discount.unwrap_or_default() / 100.0)
    }
}

impl Entity for Position {
    const NAME: &'static str = "Position";
    /// Generic fallback; repositories of document lines use
    /// [`PositionedDocument::POSITION_TYPE`] instead.
    const TYPE: &'static str = "position";
    const PATH: &'static str = "positions";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Lines report a document-specific type such as `customerorderposition`.
    fn accepts_type(entity_type: &str) -> bool {
        entity_type.ends_with("position")
    }
}

/// The `positions` field of a document.
///
/// Reads accept both the collection form (`{"meta": ..., "rows": [...]}`,
/// with rows present only when expanded) and a plain array. Writes always
/// produce an array, and the field is omitted when no rows are loaded so an
/// update never clears lines by accident.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    pub meta: Option<Meta>,
    pub rows: Vec<Position>,
}

impl Positions {
    /// Returns `true` if no rows are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of lines reported by the server, or the loaded count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.meta
            .as_ref()
            .and_then(|m| m.size)
            .and_then(|size| usize::try_from(size).ok())
            .unwrap_or(self.rows.len())
    }
}

impl From<Vec<Position>> for Positions {
    fn from(rows: Vec<Position>) -> Self {
        Self { meta: None, rows }
    }
}

impl Serialize for Positions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Positions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Rows(Vec<Position>),
            Collection {
                #[serde(default)]
                meta: Option<Meta>,
                #[serde(default)]
                rows: Vec<Position>,
            },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Rows(rows) => Self { meta: None, rows },
            Wire::Collection { meta, rows } => Self { meta, rows },
        })
    }
}

fn positions_unloaded(positions: &Option<Positions>) -> bool {
    positions.as_ref().map_or(true, Positions::is_empty)
}

/// A document status (e.g., "New", "Shipped").
///
/// States live at `entity/{type}/metadata/states/{id}` and are listed in the
/// entity type's metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_type: Option<StateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

impl State {
    /// Builds a reference to state `id` of the entity type at `entity_path`.
    #[must_use]
    pub fn reference(base: &BaseUrl, entity_path: &str, id: &str) -> EntityRef {
        EntityRef::from(Meta::new(
            base.join(&format!(
                "{}/metadata/states/{id}",
                entity_path.trim_matches('/')
            )),
            "state",
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_address_full: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_system: Option<TaxSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,
    #[serde(skip_serializing)]
    pub vat_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "positions_unloaded")]
    pub positions: Option<Positions>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery_planned_moment: Option<NaiveDateTime>,
    #[serde(skip_serializing)]
    pub payed_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub shipped_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub invoiced_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub reserved_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub demands: Option<Vec<EntityRef>>,
    #[serde(skip_serializing)]
    pub invoices_out: Option<Vec<EntityRef>>,
    #[serde(skip_serializing)]
    pub payments: Option<Vec<EntityRef>>,
}

impl Entity for CustomerOrder {
    const NAME: &'static str = "CustomerOrder";
    const TYPE: &'static str = "customerorder";
    const PATH: &'static str = "entity/customerorder";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for CustomerOrder {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl PositionedDocument for CustomerOrder {
    const POSITION_TYPE: &'static str = "customerorderposition";

    fn positions(&self) -> Option<&Positions> {
        self.positions.as_ref()
    }
}

impl HasAttributes for CustomerOrder {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,
    #[serde(skip_serializing)]
    pub vat_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "positions_unloaded")]
    pub positions: Option<Positions>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivery_planned_moment: Option<NaiveDateTime>,
    #[serde(skip_serializing)]
    pub payed_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub shipped_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub invoiced_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub wait_sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_order: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_orders: Option<Vec<EntityRef>>,
    #[serde(skip_serializing)]
    pub supplies: Option<Vec<EntityRef>>,
    #[serde(skip_serializing)]
    pub payments: Option<Vec<EntityRef>>,
}

impl Entity for PurchaseOrder {
    const NAME: &'static str = "PurchaseOrder";
    const TYPE: &'static str = "purchaseorder";
    const PATH: &'static str = "entity/purchaseorder";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for PurchaseOrder {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl PositionedDocument for PurchaseOrder {
    const POSITION_TYPE: &'static str = "purchaseorderposition";

    fn positions(&self) -> Option<&Positions> {
        self.positions.as_ref()
    }
}

impl HasAttributes for PurchaseOrder {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

/// An invoice issued to a buyer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceOut {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,
    #[serde(skip_serializing)]
    pub vat_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "positions_unloaded")]
    pub positions: Option<Positions>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_planned_moment: Option<NaiveDateTime>,
    #[serde(skip_serializing)]
    pub payed_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub shipped_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub demands: Option<Vec<EntityRef>>,
    #[serde(skip_serializing)]
    pub payments: Option<Vec<EntityRef>>,
}

impl Entity for InvoiceOut {
    const NAME: &'static str = "InvoiceOut";
    const TYPE: &'static str = "invoiceout";
    const PATH: &'static str = "entity/invoiceout";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for InvoiceOut {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl PositionedDocument for InvoiceOut {
    const POSITION_TYPE: &'static str = "invoiceposition";

    fn positions(&self) -> Option<&Positions> {
        self.positions.as_ref()
    }
}

impl HasAttributes for InvoiceOut {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

/// A shipment to a buyer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Demand {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_address_full: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,
    #[serde(skip_serializing)]
    pub vat_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "positions_unloaded")]
    pub positions: Option<Positions>,
    #[serde(skip_serializing)]
    pub payed_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub invoices_out: Option<Vec<EntityRef>>,
    #[serde(skip_serializing)]
    pub payments: Option<Vec<EntityRef>>,
}

impl Entity for Demand {
    const NAME: &'static str = "Demand";
    const TYPE: &'static str = "demand";
    const PATH: &'static str = "entity/demand";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for Demand {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl PositionedDocument for Demand {
    const POSITION_TYPE: &'static str = "demandposition";

    fn positions(&self) -> Option<&Positions> {
        self.positions.as_ref()
    }
}

impl HasAttributes for Demand {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

/// A receipt of goods from a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_included: Option<bool>,
    #[serde(skip_serializing)]
    pub vat_sum: Option<f64>,
    #[serde(default, skip_serializing_if = "positions_unloaded")]
    pub positions: Option<Positions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_number: Option<String>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub incoming_date: Option<NaiveDateTime>,
    #[serde(skip_serializing)]
    pub payed_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub invoices_in: Option<Vec<EntityRef>>,
    #[serde(skip_serializing)]
    pub payments: Option<Vec<EntityRef>>,
}

impl Entity for Supply {
    const NAME: &'static str = "Supply";
    const TYPE: &'static str = "supply";
    const PATH: &'static str = "entity/supply";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for Supply {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl PositionedDocument for Supply {
    const POSITION_TYPE: &'static str = "supplyposition";

    fn positions(&self) -> Option<&Positions> {
        self.positions.as_ref()
    }
}

impl HasAttributes for Supply {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

/// A cash receipt order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashIn {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    /// Documents this payment settles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<EntityRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub retail_shift: Option<EntityRef>,
}

impl Entity for CashIn {
    const NAME: &'static str = "CashIn";
    const TYPE: &'static str = "cashin";
    const PATH: &'static str = "entity/cashin";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for CashIn {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl HasAttributes for CashIn {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

/// A cash disbursement order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashOut {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_item: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<EntityRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,
    #[serde(skip_serializing)]
    pub retail_shift: Option<EntityRef>,
}

impl Entity for CashOut {
    const NAME: &'static str = "CashOut";
    const TYPE: &'static str = "cashout";
    const PATH: &'static str = "entity/cashout";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for CashOut {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl HasAttributes for CashOut {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

/// An incoming bank payment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIn {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<EntityRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_number: Option<String>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub incoming_date: Option<NaiveDateTime>,
}

impl Entity for PaymentIn {
    const NAME: &'static str = "PaymentIn";
    const TYPE: &'static str = "paymentin";
    const PATH: &'static str = "entity/paymentin";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for PaymentIn {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl HasAttributes for PaymentIn {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

/// An outgoing bank payment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOut {
    #[serde(flatten)]
    pub document: DocumentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_item: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<EntityRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_sum: Option<f64>,
}

impl Entity for PaymentOut {
    const NAME: &'static str = "PaymentOut";
    const TYPE: &'static str = "paymentout";
    const PATH: &'static str = "entity/paymentout";

    fn meta(&self) -> Option<&Meta> {
        self.document.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.document.id.as_deref()
    }
}

impl Document for PaymentOut {
    fn fields(&self) -> &DocumentFields {
        &self.document
    }

    fn fields_mut(&mut self) -> &mut DocumentFields {
        &mut self.document
    }
}

impl HasAttributes for PaymentOut {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.document.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.document.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn order_json() -> Value {
        json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/customerorder/5fbc6e5c-2ae1-11ee-0a80-0c3a00000b30",
                "type": "customerorder"
            },
            "id": "5fbc6e5c-2ae1-11ee-0a80-0c3a00000b30",
            "accountId": "acc",
            "updated": "2023-07-25 11:19:08.473",
            "created": "2023-07-25 11:19:08.473",
            "name": "00042",
            "moment": "2023-07-25 11:18:00.000",
            "applicable": true,
            "sum": 300000.0,
            "vatSum": 50000.0,
            "payedSum": 0.0,
            "rate": {"currency": {"meta": {"href": "https://x/entity/currency/rub", "type": "currency"}}},
            "organization": {"meta": {"href": "https://x/entity/organization/org", "type": "organization"}},
            "agent": {"meta": {"href": "https://x/entity/counterparty/cp", "type": "counterparty"}},
            "state": {"meta": {"href": "https://x/entity/customerorder/metadata/states/st", "type": "state"}},
            "positions": {
                "meta": {"href": "https://x/entity/customerorder/5fbc/positions", "type": "customerorderposition", "size": 2}
            },
            "shipmentAddress": "Moscow",
            "vatEnabled": true,
            "vatIncluded": true
        })
    }

    #[test]
    fn test_customer_order_deserialization() {
        let order: CustomerOrder = serde_json::from_value(order_json()).unwrap();

        assert_eq!(order.id(), Some("5fbc6e5c-2ae1-11ee-0a80-0c3a00000b30"));
        assert_eq!(order.document.name.as_deref(), Some("00042"));
        assert_eq!(order.document.sum, Some(300_000.0));
        assert_eq!(order.document.agent.as_ref().and_then(EntityRef::id), Some("cp"));
        assert!(order.document.moment.is_some());
        assert_eq!(order.vat_sum, Some(50_000.0));
        let positions = order.positions.as_ref().unwrap();
        assert!(positions.is_empty());
        assert_eq!(positions.size(), 2);
    }

    #[test]
    fn test_customer_order_update_body_skips_unloaded_positions() {
        let order: CustomerOrder = serde_json::from_value(order_json()).unwrap();
        let body = serde_json::to_value(&order).unwrap();

        for field in ["id", "accountId", "created", "updated", "sum", "vatSum", "payedSum", "positions"] {
            assert!(body.get(field).is_none(), "{field} must not be sent");
        }
        assert_eq!(body["name"], "00042");
        assert_eq!(body["moment"], "2023-07-25 11:18:00.000");
        assert_eq!(body["agent"]["meta"]["type"], "counterparty");
        assert!(body["agent"].get("name").is_none());
    }

    #[test]
    fn test_expanded_positions_are_read_and_written_as_array() {
        let mut payload = order_json();
        payload["positions"] = json!({
            "meta": {"href": "https://x/positions", "size": 1},
            "rows": [{
                "meta": {"href": "https://x/entity/customerorder/o/positions/p1", "type": "customerorderposition"},
                "id": "p1",
                "quantity": 2,
                "price": 1500.0,
                "discount": 10,
                "assortment": {"meta": {"href": "https://x/entity/product/pr", "type": "product"}},
                "shipped": 0
            }]
        });

        let order: CustomerOrder = serde_json::from_value(payload).unwrap();
        let positions = order.positions().unwrap();
        assert_eq!(positions.rows.len(), 1);
        assert_eq!(positions.rows[0].total(), 2700.0);

        let body = serde_json::to_value(&order).unwrap();
        assert!(body["positions"].is_array());
        assert_eq!(body["positions"][0]["quantity"], 2.0);
        assert!(body["positions"][0].get("id").is_none());
        assert!(body["positions"][0].get("shipped").is_none());
    }

    #[test]
    fn test_new_order_with_positions() {
        let base = BaseUrl::default();
        let mut order = CustomerOrder::default();
        order.document.organization = Some(EntityRef::new(&base, "entity/organization", "o", "organization"));
        order.document.agent = Some(EntityRef::new(&base, "entity/counterparty", "c", "counterparty"));
        order.positions = Some(
            vec![Position::new(
                EntityRef::new(&base, "entity/product", "p", "product"),
                3.0,
                100.0,
            )]
            .into(),
        );

        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["positions"][0]["price"], 100.0);
        assert_eq!(
            body["positions"][0]["assortment"]["meta"]["href"],
            "https://api.moysklad.ru/api/remap/1.2/entity/product/p"
        );
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_position_accepts_document_specific_types() {
        assert!(Position::accepts_type("customerorderposition"));
        assert!(Position::accepts_type("demandposition"));
        assert!(!Position::accepts_type("product"));
    }

    #[test]
    fn test_state_reference() {
        let reference = State::reference(&BaseUrl::default(), "entity/customerorder", "s1");
        assert_eq!(
            reference.meta.href,
            "https://api.moysklad.ru/api/remap/1.2/entity/customerorder/metadata/states/s1"
        );
        assert_eq!(reference.meta.type_name(), "state");
    }

    #[test]
    fn test_state_type_parsing() {
        let state: State = serde_json::from_value(json!({
            "id": "s1",
            "name": "Shipped",
            "color": 15106476,
            "stateType": "Successful",
            "entityType": "customerorder"
        }))
        .unwrap();
        assert_eq!(state.state_type, Some(StateType::Successful));
    }

    #[test]
    fn test_payment_operations_and_types() {
        let payment: PaymentIn = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/paymentin/pi", "type": "paymentin"},
            "id": "pi",
            "paymentPurpose": "Order 42",
            "incomingDate": "2024-01-10 00:00:00",
            "operations": [{"meta": {"href": "https://x/entity/customerorder/o", "type": "customerorder"}, "linkedSum": 500.0}]
        }))
        .unwrap();

        assert_eq!(payment.payment_purpose.as_deref(), Some("Order 42"));
        assert_eq!(payment.operations.as_ref().unwrap()[0].id(), Some("o"));
        assert!(payment.incoming_date.is_some());
        assert_eq!(CashIn::PATH, "entity/cashin");
        assert_eq!(CashOut::TYPE, "cashout");
        assert_eq!(PaymentOut::PATH, "entity/paymentout");
        assert_eq!(Supply::TYPE, "supply");
        assert_eq!(Demand::PATH, "entity/demand");
        assert_eq!(InvoiceOut::TYPE, "invoiceout");
        assert_eq!(PurchaseOrder::PATH, "entity/purchaseorder");
    }
}
