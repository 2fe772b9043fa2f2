//! Rows of the stock reports.
//!
//! Reports are read-only and are not entities: they have no id and cannot be
//! written back.

use serde::{Deserialize, Serialize};

use crate::rest::{EntityRef, Meta};

/// Path of the full stock report.
pub const STOCK_ALL_PATH: &str = "report/stock/all";

/// Path of the per-store stock report.
pub const STOCK_BY_STORE_PATH: &str = "report/stock/bystore";

/// One row of `report/stock/all`.
///
/// `meta` points at the assortment item (product, variant...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub meta: Option<Meta>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub article: Option<String>,
    pub external_code: Option<String>,
    pub stock: Option<f64>,
    pub reserve: Option<f64>,
    pub in_transit: Option<f64>,
    pub quantity: Option<f64>,
    /// Cost price in minor units.
    pub price: Option<f64>,
    pub sale_price: Option<f64>,
    pub stock_days: Option<i64>,
    pub uom: Option<EntityRef>,
    pub folder: Option<EntityRef>,
    pub image: Option<EntityRef>,
}

impl StockRow {
    /// Returns the assortment item id.
    #[must_use]
    pub fn assortment_id(&self) -> Option<&str> {
        self.meta.as_ref().and_then(Meta::id)
    }

    /// Returns stock minus reserve.
    #[must_use]
    pub fn available(&self) -> f64 {
        self.stock.unwrap_or_default() - self.reserve.unwrap_or_default()
    }
}

/// One row of `report/stock/bystore`: an item with a breakdown per store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockByStoreRow {
    pub meta: Option<Meta>,
    #[serde(default)]
    pub stock_by_store: Vec<StoreStock>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreStock {
    pub meta: Option<Meta>,
    pub name: Option<String>,
    pub stock: Option<f64>,
    pub reserve: Option<f64>,
    pub in_transit: Option<f64>,
}
