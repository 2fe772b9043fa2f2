//! Assortment: the union view over everything that can be sold or stocked,
//! plus services and bundles.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{datetime, Attribute, Entity, EntityRef, HasAttributes, Meta};

use super::enums::{PaymentItemType, TaxSystem, TrackingType};
use super::products::{Barcode, Characteristic, Pack, Price};

/// Types reported by rows of `entity/assortment`.
pub const ASSORTMENT_TYPES: [&str; 5] = ["product", "variant", "service", "bundle", "consignment"];

/// One row of the assortment: a product, variant, service, bundle or
/// consignment, with stock figures attached.
///
/// The concrete kind is `meta.type`; see [`Assortment::entity_type`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assortment {
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
    pub updated: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_parent_vat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_vat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_folder: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<Price>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<Barcode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packs: Option<Vec<Pack>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_item_type: Option<PaymentItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_type: Option<TrackingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_serial_trackable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_prohibited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_transit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Parent product of a variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Vec<Characteristic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl Assortment {
    /// Returns the concrete type (`product`, `variant`, ...).
    #[must_use]
    pub fn entity_type(&self) -> &str {
        self.meta.as_ref().map(Meta::type_name).unwrap_or_default()
    }

    #[must_use]
    pub fn is_product(&self) -> bool {
        self.entity_type() == "product"
    }

    #[must_use]
    pub fn is_variant(&self) -> bool {
        self.entity_type() == "variant"
    }

    #[must_use]
    pub fn is_service(&self) -> bool {
        self.entity_type() == "service"
    }

    #[must_use]
    pub fn is_bundle(&self) -> bool {
        self.entity_type() == "bundle"
    }

    /// Returns a reference to the underlying entity, usable as a document
    /// position's `assortment`.
    #[must_use]
    pub fn to_assortment_ref(&self) -> Option<EntityRef> {
        self.meta.clone().map(EntityRef::from)
    }
}

impl Entity for Assortment {
    const NAME: &'static str = "Assortment";
    const TYPE: &'static str = "assortment";
    const PATH: &'static str = "entity/assortment";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn accepts_type(entity_type: &str) -> bool {
        entity_type == Self::TYPE || ASSORTMENT_TYPES.contains(&entity_type)
    }
}

/// Account-wide assortment settings (`entity/assortment/settings`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssortmentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_rules: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_code_rules: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_shared: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
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
    pub updated: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing)]
    pub path_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_folder: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_parent_vat: Option<bool>,
    #[serde(skip_serializing)]
    pub effective_vat: Option<i32>,
    #[serde(skip_serializing)]
    pub effective_vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_system: Option<TaxSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<Price>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<Barcode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_prohibited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_item_type: Option<PaymentItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing)]
    pub files: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
}

impl Entity for Service {
    const NAME: &'static str = "Service";
    const TYPE: &'static str = "service";
    const PATH: &'static str = "entity/service";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasAttributes for Service {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.attributes
    }
}

/// One part of a bundle (`entity/bundle/{id}/components`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assortment: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl BundleComponent {
    #[must_use]
    pub fn new(assortment: EntityRef, quantity: f64) -> Self {
        Self {
            assortment: Some(assortment),
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}

impl Entity for BundleComponent {
    const NAME: &'static str = "BundleComponent";
    const TYPE: &'static str = "bundlecomponent";
    const PATH: &'static str = "components";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A kit sold as one item and assembled from components.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
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
    pub updated: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing)]
    pub path_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_folder: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_parent_vat: Option<bool>,
    #[serde(skip_serializing)]
    pub effective_vat: Option<i32>,
    #[serde(skip_serializing)]
    pub effective_vat_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_system: Option<TaxSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tnved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_type: Option<TrackingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_item_type: Option<PaymentItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_disposal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_prohibited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<Price>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhead: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<Barcode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,
    /// Component collection; rows are present only when expanded.
    #[serde(skip_serializing)]
    pub components: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing)]
    pub files: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
}

impl Entity for Bundle {
    const NAME: &'static str = "Bundle";
    const TYPE: &'static str = "bundle";
    const PATH: &'static str = "entity/bundle";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasAttributes for Bundle {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.attributes
    }
}
