//! Entity types of the JSON API 1.2.
//!
//! Each submodule groups one entity family. Every type here is a plain serde
//! struct: all fields optional, unknown fields ignored on read, `None` fields
//! and server-assigned fields omitted on write.
//!
//! | Module | Entities |
//! |---|---|
//! | products | [`Product`], [`ProductFolder`], [`Variant`], [`Uom`], [`Currency`], [`PriceType`] |
//! | counterparty | [`Counterparty`], [`ContactPerson`], [`BankAccount`] |
//! | documents | [`CustomerOrder`], [`PurchaseOrder`], [`InvoiceOut`], [`Demand`], [`Supply`], [`CashIn`], [`CashOut`], [`PaymentIn`], [`PaymentOut`] |
//! | organization | [`Organization`], [`Employee`], [`Group`], [`Store`] |
//! | assortment | [`Assortment`], [`Service`], [`Bundle`], [`BundleComponent`] |
//! | custom | [`CustomEntity`], [`CustomEntityElement`] |
//! | webhook | [`Webhook`], [`WebhookStock`] |
//! | stock | [`StockRow`] |
//! | metadata | [`EntityMetadata`], [`AttributeDefinition`] |
//!
//! # Example
//!
//! ```rust
//! use moysklad_api::rest::resources::{Price, Product};
//!
//! let mut product = Product::named("Coffee beans 1kg");
//! product.article = Some("CB-1000".to_string());
//! product.sale_prices = Some(vec![Price::new(150_000.0)]);
//!
//! let body = serde_json::to_value(&product).unwrap();
//! assert_eq!(body["salePrices"][0]["value"], 150_000.0);
//! assert!(body.get("id").is_none());
//! ```

mod assortment;
mod common;
mod counterparty;
mod custom;
mod documents;
mod enums;
mod metadata;
mod organization;
mod products;
mod stock;
mod webhook;

pub use assortment::{
    Assortment, AssortmentSettings, Bundle, BundleComponent, Service, ASSORTMENT_TYPES,
};
pub use common::Address;
pub use counterparty::{BankAccount, ContactPerson, Counterparty, Note};
pub use custom::{CustomEntity, CustomEntityElement, CUSTOM_ENTITIES_METADATA_PATH};
pub use documents::{
    CashIn, CashOut, CustomerOrder, Demand, Document, DocumentFields, InvoiceOut, PaymentIn,
    PaymentOut, Position, PositionedDocument, Positions, PurchaseOrder, Rate, State, Supply,
};
pub use enums::{CompanyType, PaymentItemType, StateType, TaxSystem, TrackingType};
pub use metadata::{AttributeDefinition, EntityMetadata};
pub use organization::{Employee, Group, Organization, Store};
pub use products::{
    Barcode, Characteristic, Currency, Pack, Price, PriceType, Product, ProductFolder, Uom,
    Variant,
};
pub use stock::{StockByStoreRow, StockRow, StoreStock, STOCK_ALL_PATH, STOCK_BY_STORE_PATH};
pub use webhook::{DiffType, Webhook, WebhookAction, WebhookStock};
