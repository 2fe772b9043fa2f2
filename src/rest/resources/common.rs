//! Value types shared by several entity families.

use serde::{Deserialize, Serialize};

use crate::rest::EntityRef;

/// A structured postal address (`actualAddressFull`, `legalAddressFull`,
/// `addressFull`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Address {
    /// Returns the non-empty parts joined by `, `.
    #[must_use]
    pub fn to_line(&self) -> String {
        [
            self.postal_code.as_deref(),
            self.city.as_deref(),
            self.street.as_deref(),
            self.house.as_deref(),
            self.apartment.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}
