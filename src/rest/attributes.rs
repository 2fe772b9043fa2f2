//! Custom fields ("additional attributes") carried by many entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::BaseUrl;
use crate::rest::{Entity, Meta};

/// Value of `meta.type` for attribute definitions.
pub const ATTRIBUTE_TYPE: &str = "attributemetadata";

/// A custom field value attached to an entity.
///
/// `value` is kept as raw JSON: depending on the attribute type it can be a
/// string, number, boolean, timestamp string or a `{"meta": ...}` reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_entity_meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
}

impl Attribute {
    /// Creates an attribute value with a ready-made meta.
    #[must_use]
    pub fn new(meta: Meta, id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            meta: Some(meta),
            id: Some(id.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Returns the attribute definition id from `id` or `meta.href`.
    #[must_use]
    pub fn definition_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.meta.as_ref().and_then(Meta::id))
    }
}

/// Attribute helpers for entities that carry custom fields.
///
/// Implementors only expose their `attributes` field; lookups, upserts and
/// removals are provided.
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::rest::HasAttributes;
///
/// product.set_attribute(client.base_url(), "1f2e...", "red");
/// assert_eq!(product.attribute_value("1f2e..."), Some(&serde_json::json!("red")));
/// ```
pub trait HasAttributes: Entity {
    /// Returns the attribute list, if loaded.
    fn attributes(&self) -> Option<&Vec<Attribute>>;

    /// Returns the attribute list slot for modification.
    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>>;

    /// Builds the meta of the attribute definition `id` for this entity type.
    #[must_use]
    fn attribute_meta(base: &BaseUrl, id: &str) -> Meta {
        Meta::new(
            base.join(&format!("{}/metadata/attributes/{id}", Self::PATH)),
            ATTRIBUTE_TYPE,
        )
    }

    /// Finds the attribute with the given definition id.
    fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes()?
            .iter()
            .find(|attribute| attribute.definition_id() == Some(id))
    }

    /// Returns the value of the attribute with the given definition id.
    fn attribute_value(&self, id: &str) -> Option<&Value> {
        self.attribute(id)?.value.as_ref()
    }

    /// Updates the attribute's value, inserting the attribute when missing.
    fn set_attribute(&mut self, base: &BaseUrl, id: &str, value: impl Into<Value>) -> &mut Attribute {
        let value = value.into();
        let attributes = self.attributes_mut().get_or_insert_with(Vec::new);
        let index = match attributes
            .iter()
            .position(|attribute| attribute.definition_id() == Some(id))
        {
            Some(index) => index,
            None => {
                attributes.push(Attribute {
                    id: Some(id.to_string()),
                    ..Attribute::default()
                });
                attributes.len() - 1
            }
        };

        let attribute = &mut attributes[index];
        attribute.value = Some(value);
        if attribute.meta.is_none() {
            attribute.meta = Some(Self::attribute_meta(base, id));
        }
        attribute
    }

    /// Removes and returns the attribute with the given definition id.
    fn remove_attribute(&mut self, id: &str) -> Option<Attribute> {
        let attributes = self.attributes_mut().as_mut()?;
        let index = attributes
            .iter()
            .position(|attribute| attribute.definition_id() == Some(id))?;
        Some(attributes.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Tagged {
        #[serde(skip_serializing_if = "Option::is_none")]
        meta: Option<Meta>,
        #[serde(skip_serializing)]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        attributes: Option<Vec<Attribute>>,
    }

    impl Entity for Tagged {
        const NAME: &'static str = "Tagged";
        const TYPE: &'static str = "tagged";
        const PATH: &'static str = "entity/tagged";

        fn meta(&self) -> Option<&Meta> {
            self.meta.as_ref()
        }

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    impl HasAttributes for Tagged {
        fn attributes(&self) -> Option<&Vec<Attribute>> {
            self.attributes.as_ref()
        }

        fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
            &mut self.attributes
        }
    }

    #[test]
    fn test_set_attribute_inserts_with_meta() {
        let mut entity = Tagged::default();
        entity.set_attribute(&BaseUrl::default(), "attr-1", "blue");

        let attribute = entity.attribute("attr-1").unwrap();
        assert_eq!(attribute.value, Some(json!("blue")));
        let meta = attribute.meta.as_ref().unwrap();
        assert_eq!(
            meta.href,
            "https://api.moysklad.ru/api/remap/1.2/entity/tagged/metadata/attributes/attr-1"
        );
        assert_eq!(meta.type_name(), "attributemetadata");
    }

    #[test]
    fn test_set_attribute_updates_existing_value() {
        let mut entity: Tagged = serde_json::from_value(json!({
            "attributes": [{
                "meta": {
                    "href": "https://x/entity/tagged/metadata/attributes/attr-1",
                    "type": "attributemetadata"
                },
                "id": "attr-1",
                "name": "Color",
                "type": "string",
                "value": "red"
            }]
        }))
        .unwrap();

        entity.set_attribute(&BaseUrl::default(), "attr-1", "green");

        assert_eq!(entity.attributes.as_ref().unwrap().len(), 1);
        assert_eq!(entity.attribute_value("attr-1"), Some(&json!("green")));
        assert_eq!(
            entity.attribute("attr-1").unwrap().meta.as_ref().unwrap().href,
            "https://x/entity/tagged/metadata/attributes/attr-1"
        );
    }

    #[test]
    fn test_attribute_found_by_meta_href_without_id() {
        let entity: Tagged = serde_json::from_value(json!({
            "attributes": [{
                "meta": {"href": "https://x/entity/tagged/metadata/attributes/a-9"},
                "value": 5
            }]
        }))
        .unwrap();
        assert_eq!(entity.attribute_value("a-9"), Some(&json!(5)));
    }

    #[test]
    fn test_remove_attribute() {
        let mut entity = Tagged::default();
        assert!(entity.remove_attribute("missing").is_none());

        entity.set_attribute(&BaseUrl::default(), "a", 1);
        entity.set_attribute(&BaseUrl::default(), "b", true);
        let removed = entity.remove_attribute("a").unwrap();

        assert_eq!(removed.value, Some(json!(1)));
        assert!(entity.attribute("a").is_none());
        assert_eq!(entity.attribute_value("b"), Some(&json!(true)));
    }

    #[test]
    fn test_attribute_serialization_omits_unset_fields() {
        let attribute = Attribute::new(Meta::new("h", ATTRIBUTE_TYPE), "a", 3);
        assert_eq!(
            serde_json::to_value(&attribute).unwrap(),
            json!({
                "meta": {"href": "h", "type": "attributemetadata", "mediaType": "application/json"},
                "id": "a",
                "value": 3
            })
        );
    }
}
