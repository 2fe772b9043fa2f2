//! Entity type metadata: attribute definitions, states and sharing defaults
//! (`{path}/metadata`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::{datetime, Meta};

use super::documents::State;

/// Definition of a custom field.
///
/// `attribute_type` is one of `string`, `long`, `time`, `file`, `double`,
/// `boolean`, `text`, `link`, `customentity` or an entity type for
/// reference attributes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    #[serde(default)]
    pub meta: Meta,
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub attribute_type: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub show: Option<bool>,
    pub description: Option<String>,
    pub custom_entity_meta: Option<Meta>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub updated: Option<NaiveDateTime>,
}

impl AttributeDefinition {
    /// Returns the definition id from `id` or `meta.href`.
    #[must_use]
    pub fn definition_id(&self) -> Option<&str> {
        self.id.as_deref().or_else(|| self.meta.id())
    }
}

/// Metadata of an entity type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default, deserialize_with = "rows_or_list")]
    pub attributes: Vec<AttributeDefinition>,
    #[serde(default)]
    pub states: Vec<State>,
    pub create_shared: Option<bool>,
}

impl EntityMetadata {
    /// Finds an attribute definition by name.
    #[must_use]
    pub fn attribute_by_name(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
    }

    /// Finds a state by name.
    #[must_use]
    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name.as_deref() == Some(name))
    }
}

/// Attributes arrive either inline or as a collection with `rows`.
fn rows_or_list<'de, D>(deserializer: D) -> Result<Vec<AttributeDefinition>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        List(Vec<AttributeDefinition>),
        Collection {
            #[serde(default)]
            rows: Vec<AttributeDefinition>,
        },
    }

    Ok(match Wire::deserialize(deserializer)? {
        Wire::List(rows) | Wire::Collection { rows } => rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::StateType;
    use serde_json::json;

    #[test]
    fn test_metadata_deserialization() {
        let metadata: EntityMetadata = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/customerorder/metadata", "type": "embeddedentity"},
            "attributes": [
                {
                    "meta": {"href": "https://x/entity/customerorder/metadata/attributes/a1", "type": "attributemetadata"},
                    "id": "a1",
                    "name": "Source",
                    "type": "string",
                    "required": false,
                    "show": true
                }
            ],
            "states": [
                {"id": "s1", "name": "New", "color": 15106476, "stateType": "Regular", "entityType": "customerorder"},
                {"id": "s2", "name": "Done", "stateType": "Successful", "entityType": "customerorder"}
            ],
            "createShared": true
        }))
        .unwrap();

        assert_eq!(metadata.attributes.len(), 1);
        assert_eq!(
            metadata.attribute_by_name("Source").and_then(AttributeDefinition::definition_id),
            Some("a1")
        );
        assert_eq!(
            metadata.state_by_name("Done").and_then(|s| s.state_type),
            Some(StateType::Successful)
        );
        assert_eq!(metadata.create_shared, Some(true));
    }

    #[test]
    fn test_attributes_as_collection() {
        let metadata: EntityMetadata = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/product/metadata"},
            "attributes": {
                "meta": {"href": "https://x/entity/product/metadata/attributes", "size": 1},
                "rows": [{"meta": {"href": "https://x/entity/product/metadata/attributes/c"}, "name": "Color", "type": "customentity"}]
            }
        }))
        .unwrap();

        let color = metadata.attribute_by_name("Color").unwrap();
        assert_eq!(color.definition_id(), Some("c"));
        assert!(metadata.states.is_empty());
    }

    #[test]
    fn test_empty_metadata() {
        let metadata: EntityMetadata = serde_json::from_value(json!({})).unwrap();
        assert!(metadata.attributes.is_empty());
        assert_eq!(metadata.create_shared, None);
    }
}
