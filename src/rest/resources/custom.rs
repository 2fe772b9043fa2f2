//! User-defined dictionaries ("custom entities") and their elements.
//!
//! A dictionary lives at `entity/customentity/{dictionary_id}`; its elements
//! are rows of the same path and are addressed as
//! `entity/customentity/{dictionary_id}/{element_id}`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::BaseUrl;
use crate::rest::{datetime, Entity, EntityRef, Meta};

/// Account path listing every dictionary definition.
pub const CUSTOM_ENTITIES_METADATA_PATH: &str = "context/companysettings/metadata/customEntities";

/// A dictionary definition.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Locator of the element collection, present in metadata listings.
    #[serde(skip_serializing)]
    pub entity_meta: Option<Meta>,
}

impl CustomEntity {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the dictionary id used in element paths.
    ///
    /// Metadata listings expose it only through `entityMeta.href`.
    #[must_use]
    pub fn dictionary_id(&self) -> Option<String> {
        self.entity_meta
            .as_ref()
            .and_then(|m| m.id_after(Self::PATH))
            .map(str::to_string)
            .or_else(|| self.entity_id())
    }
}

impl Entity for CustomEntity {
    const NAME: &'static str = "CustomEntity";
    const TYPE: &'static str = "customentity";
    const PATH: &'static str = "entity/customentity";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn accepts_type(entity_type: &str) -> bool {
        entity_type == Self::TYPE || entity_type == "customentitymetadata"
    }
}

/// One element of a dictionary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntityElement {
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
}

impl CustomEntityElement {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builds a reference to element `id` of dictionary `dictionary_id`,
    /// as used for `customentity` attribute values.
    #[must_use]
    pub fn reference(base: &BaseUrl, dictionary_id: &str, id: &str) -> EntityRef {
        EntityRef::new(
            base,
            &format!("{}/{dictionary_id}", Self::PATH),
            id,
            Self::TYPE,
        )
    }
}

impl Entity for CustomEntityElement {
    const NAME: &'static str = "CustomEntityElement";
    const TYPE: &'static str = "customentity";
    const PATH: &'static str = "entity/customentity";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Elements sit one level below the dictionary, so the id is the last
    /// href segment rather than the one following the path.
    fn entity_id(&self) -> Option<String> {
        self.id
            .clone()
            .or_else(|| self.meta.as_ref().and_then(Meta::id).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dictionary_id_from_entity_meta() {
        let dictionary: CustomEntity = serde_json::from_value(json!({
            "meta": {
                "href": "https://x/context/companysettings/metadata/customEntities/d-1",
                "type": "customentitymetadata"
            },
            "name": "Colors",
            "entityMeta": {
                "href": "https://x/entity/customentity/d-1",
                "type": "customentity"
            }
        }))
        .unwrap();

        assert_eq!(dictionary.dictionary_id().as_deref(), Some("d-1"));
        assert_eq!(serde_json::to_value(&dictionary).unwrap(), json!({
            "meta": {
                "href": "https://x/context/companysettings/metadata/customEntities/d-1",
                "type": "customentitymetadata"
            },
            "name": "Colors"
        }));
    }

    #[test]
    fn test_element_id_is_last_segment() {
        let element: CustomEntityElement = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/customentity/d-1/e-9", "type": "customentity"},
            "name": "Red"
        }))
        .unwrap();

        assert_eq!(element.entity_id().as_deref(), Some("e-9"));
    }

    #[test]
    fn test_element_reference() {
        let reference = CustomEntityElement::reference(&BaseUrl::default(), "d-1", "e-9");
        assert_eq!(
            reference.meta.href,
            "https://api.moysklad.ru/api/remap/1.2/entity/customentity/d-1/e-9"
        );
        assert_eq!(reference.meta.type_name(), "customentity");
    }

    #[test]
    fn test_new_element_body() {
        let body = serde_json::to_value(CustomEntityElement::named("Blue")).unwrap();
        assert_eq!(body, json!({"name": "Blue"}));
    }
}
