//! Goods catalog: products, folders, variants, units, currencies and price types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{datetime, Attribute, Entity, EntityRef, HasAttributes, Meta};

use super::enums::{PaymentItemType, TaxSystem, TrackingType};

/// A price in the account's minor currency units (kopecks).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<EntityRef>,
}

impl Price {
    /// Creates a price of `value` minor units.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Sets the price type reference.
    #[must_use]
    pub fn with_price_type(mut self, price_type: EntityRef) -> Self {
        self.price_type = Some(price_type);
        self
    }

    /// Sets the currency reference.
    #[must_use]
    pub fn with_currency(mut self, currency: EntityRef) -> Self {
        self.currency = Some(currency);
        self
    }
}

/// One barcode; exactly one of the fields is set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Barcode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean13: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code128: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

impl Barcode {
    /// Creates an EAN-13 barcode.
    #[must_use]
    pub fn ean13(code: impl Into<String>) -> Self {
        Self {
            ean13: Some(code.into()),
            ..Self::default()
        }
    }

    /// Returns the code, whatever its symbology.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.ean13
            .as_deref()
            .or(self.ean8.as_deref())
            .or(self.code128.as_deref())
            .or(self.gtin.as_deref())
            .or(self.upc.as_deref())
    }
}

/// A packaging unit of a product (e.g., a box of 12).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<Barcode>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
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
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<Barcode>>,
    #[serde(skip_serializing)]
    pub variants_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_serial_trackable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_type: Option<TrackingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_item_type: Option<PaymentItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_prohibited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packs: Option<Vec<Pack>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
}

impl Product {
    /// Creates an unsaved product with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the sale price of the price type with the given name.
    #[must_use]
    pub fn sale_price(&self, price_type_name: &str) -> Option<&Price> {
        self.sale_prices.as_ref()?.iter().find(|price| {
            price
                .price_type
                .as_ref()
                .and_then(|t| t.field("name"))
                .and_then(Value::as_str)
                == Some(price_type_name)
        })
    }

    /// Returns `true` if the product carries the given barcode.
    #[must_use]
    pub fn has_barcode(&self, code: &str) -> bool {
        self.barcodes
            .iter()
            .flatten()
            .any(|barcode| barcode.value() == Some(code))
    }
}

impl Entity for Product {
    const NAME: &'static str = "Product";
    const TYPE: &'static str = "product";
    const PATH: &'static str = "entity/product";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasAttributes for Product {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.attributes
    }
}

/// A catalog folder ("product group").
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFolder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub path_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
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
    pub shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_folder: Option<EntityRef>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub updated: Option<NaiveDateTime>,
}

impl Entity for ProductFolder {
    const NAME: &'static str = "ProductFolder";
    const TYPE: &'static str = "productfolder";
    const PATH: &'static str = "entity/productfolder";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A variant characteristic value (e.g., size = XL).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Characteristic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A modification of a product distinguished by characteristics.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Vec<Characteristic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_prices: Option<Vec<Price>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcodes: Option<Vec<Barcode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packs: Option<Vec<Pack>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_prohibited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_serial_trackable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_type: Option<TrackingType>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub updated: Option<NaiveDateTime>,
}

impl Variant {
    /// Returns the value of the characteristic with the given name.
    #[must_use]
    pub fn characteristic(&self, name: &str) -> Option<&str> {
        self.characteristics
            .iter()
            .flatten()
            .find(|c| c.name.as_deref() == Some(name))
            .and_then(|c| c.value.as_deref())
    }
}

impl Entity for Variant {
    const NAME: &'static str = "Variant";
    const TYPE: &'static str = "variant";
    const PATH: &'static str = "entity/variant";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A unit of measure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Uom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub updated: Option<NaiveDateTime>,
}

impl Entity for Uom {
    const NAME: &'static str = "Uom";
    const TYPE: &'static str = "uom";
    const PATH: &'static str = "entity/uom";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indirect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_update_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_unit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_unit: Option<Value>,
    #[serde(skip_serializing)]
    pub system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl Entity for Currency {
    const NAME: &'static str = "Currency";
    const TYPE: &'static str = "currency";
    const PATH: &'static str = "entity/currency";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A sale price type configured in the company settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
}

impl Entity for PriceType {
    const NAME: &'static str = "PriceType";
    const TYPE: &'static str = "pricetype";
    const PATH: &'static str = "context/companysettings/pricetype";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;
    use serde_json::json;

    fn product_json() -> Value {
        json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/product/7944ef04-f831-11e5-7a69-971500188b19",
                "metadataHref": "https://api.moysklad.ru/api/remap/1.2/entity/product/metadata",
                "type": "product",
                "mediaType": "application/json"
            },
            "id": "7944ef04-f831-11e5-7a69-971500188b19",
            "accountId": "1185513e-f7f5-11e5-7a69-971500000a42",
            "shared": true,
            "updated": "2024-02-12 10:04:41.123",
            "name": "Chair",
            "code": "00012",
            "externalCode": "ext-12",
            "archived": false,
            "pathName": "Furniture",
            "vat": 20,
            "effectiveVat": 20,
            "uom": {"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/uom/19f1edc0", "type": "uom"}},
            "salePrices": [{
                "value": 150000.0,
                "currency": {"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/currency/c1", "type": "currency"}},
                "priceType": {
                    "meta": {"href": "https://api.moysklad.ru/api/remap/1.2/context/companysettings/pricetype/pt1", "type": "pricetype"},
                    "id": "pt1",
                    "name": "Retail"
                }
            }],
            "buyPrice": {"value": 90000.0},
            "barcodes": [{"ean13": "2000000000019"}, {"code128": "CH-12"}],
            "article": "CH-12",
            "weight": 4.5,
            "variantsCount": 2,
            "trackingType": "NOT_TRACKED",
            "paymentItemType": "good",
            "taxSystem": "GENERAL_TAX_SYSTEM"
        })
    }

    #[test]
    fn test_product_deserialization() {
        let product: Product = serde_json::from_value(product_json()).unwrap();

        assert_eq!(product.id.as_deref(), Some("7944ef04-f831-11e5-7a69-971500188b19"));
        assert_eq!(product.name.as_deref(), Some("Chair"));
        assert_eq!(product.vat, Some(20));
        assert_eq!(product.variants_count, Some(2));
        assert_eq!(product.tracking_type, Some(TrackingType::NotTracked));
        assert_eq!(product.payment_item_type, Some(PaymentItemType::Good));
        assert_eq!(product.tax_system, Some(TaxSystem::GeneralTaxSystem));
        assert_eq!(product.uom.as_ref().and_then(EntityRef::id), Some("19f1edc0"));
        assert_eq!(
            product.updated.unwrap().to_string(),
            "2024-02-12 10:04:41.123"
        );
        assert!(product.has_barcode("CH-12"));
        assert!(!product.has_barcode("nope"));
        assert_eq!(product.sale_price("Retail").unwrap().value, 150_000.0);
        assert!(product.sale_price("Wholesale").is_none());
    }

    #[test]
    fn test_product_serialization_skips_server_fields() {
        let product: Product = serde_json::from_value(product_json()).unwrap();
        let body = serde_json::to_value(&product).unwrap();

        for field in ["id", "accountId", "updated", "pathName", "effectiveVat", "variantsCount"] {
            assert!(body.get(field).is_none(), "{field} must not be sent");
        }
        assert_eq!(body["name"], "Chair");
        assert_eq!(body["meta"]["type"], "product");
        assert_eq!(
            body["salePrices"][0]["priceType"],
            json!({"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/context/companysettings/pricetype/pt1", "type": "pricetype"}})
        );
    }

    #[test]
    fn test_new_product_serializes_only_set_fields() {
        let product = Product {
            article: Some("A-1".to_string()),
            sale_prices: Some(vec![Price::new(100.0).with_price_type(EntityRef::new(
                &BaseUrl::default(),
                PriceType::PATH,
                "pt",
                PriceType::TYPE,
            ))]),
            ..Product::named("Lamp")
        };

        let body = serde_json::to_value(&product).unwrap();
        assert_eq!(body["name"], "Lamp");
        assert_eq!(body["article"], "A-1");
        assert_eq!(body["salePrices"][0]["value"], 100.0);
        assert_eq!(
            body["salePrices"][0]["priceType"]["meta"]["href"],
            "https://api.moysklad.ru/api/remap/1.2/context/companysettings/pricetype/pt"
        );
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_product_attributes_use_product_path() {
        let mut product = Product::named("Lamp");
        product.set_attribute(&BaseUrl::default(), "a1", "brass");
        let meta = product.attributes.as_ref().unwrap()[0].meta.clone().unwrap();
        assert_eq!(
            meta.href,
            "https://api.moysklad.ru/api/remap/1.2/entity/product/metadata/attributes/a1"
        );
    }

    #[test]
    fn test_variant_characteristics() {
        let variant: Variant = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/variant/v1", "type": "variant"},
            "id": "v1",
            "name": "Chair (red)",
            "characteristics": [{"id": "c1", "name": "Color", "value": "red"}],
            "product": {"meta": {"href": "https://x/entity/product/p1", "type": "product"}}
        }))
        .unwrap();

        assert_eq!(variant.characteristic("Color"), Some("red"));
        assert_eq!(variant.characteristic("Size"), None);
        assert_eq!(variant.product.as_ref().and_then(EntityRef::id), Some("p1"));
    }

    #[test]
    fn test_entity_paths() {
        assert_eq!(ProductFolder::PATH, "entity/productfolder");
        assert_eq!(PriceType::PATH, "context/companysettings/pricetype");
        assert_eq!(Currency::TYPE, "currency");
        assert_eq!(Uom::TYPE, "uom");
    }

    #[test]
    fn test_barcode_value() {
        assert_eq!(Barcode::ean13("123").value(), Some("123"));
        assert_eq!(Barcode::default().value(), None);
    }
}
