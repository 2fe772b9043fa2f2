//! Self-describing locators attached to every entity.
//!
//! Every object the API returns carries a `meta` block with its absolute
//! `href` and `type`. References to other entities are written as
//! `{"meta": {...}}` objects, modelled here by [`EntityRef`].

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::BaseUrl;

/// Media type the API reports for JSON resources.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Locator of an entity or a list.
///
/// List responses add `size`, `limit`, `offset` and the paging links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_href: Option<String>,
}

impl Meta {
    /// Creates a meta with an href and a type.
    #[must_use]
    pub fn new(href: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            entity_type: Some(entity_type.into()),
            media_type: Some(JSON_MEDIA_TYPE.to_string()),
            ..Self::default()
        }
    }

    /// Builds the meta of `{base}/{path}/{id}`.
    #[must_use]
    pub fn for_entity(base: &BaseUrl, path: &str, id: &str, entity_type: &str) -> Self {
        let path = path.trim_matches('/');
        Self {
            metadata_href: Some(base.join(&format!("{path}/metadata"))),
            ..Self::new(base.join(&format!("{path}/{id}")), entity_type)
        }
    }

    /// Returns the last path segment of `href`, ignoring any query string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        let path = self.href.split(['?', '#']).next().unwrap_or_default();
        path.trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && !segment.contains(':'))
    }

    /// Returns the segment following `path` in `href`.
    ///
    /// For `.../entity/customerorder/{id}/positions/{pid}` and the path
    /// `entity/customerorder` this yields the order id, not the position id.
    #[must_use]
    pub fn id_after(&self, path: &str) -> Option<&str> {
        let path = path.trim_matches('/');
        let href = self.href.split(['?', '#']).next().unwrap_or_default();
        let marker = format!("/{path}/");
        let start = href.find(&marker)? + marker.len();
        href[start..].split('/').next().filter(|s| !s.is_empty())
    }

    /// Returns the declared type, or an empty string.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.entity_type.as_deref().unwrap_or_default()
    }

    /// Returns `true` if a list meta points to another page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_href.is_some()
    }
}

/// A reference to another entity: `{"meta": {...}}` on the wire.
///
/// When a read uses `expand`, the referenced entity's fields arrive next to
/// `meta`; they are kept in [`EntityRef::expanded`] and can be decoded with
/// [`EntityRef::expanded_as`]. Only `meta` is written back.
///
/// # Example
///
/// ```rust
/// use moysklad_api::config::BaseUrl;
/// use moysklad_api::rest::EntityRef;
///
/// let agent = EntityRef::new(&BaseUrl::default(), "entity/counterparty", "42", "counterparty");
/// assert_eq!(
///     serde_json::to_value(&agent).unwrap()["meta"]["href"],
///     "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/42"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntityRef {
    pub meta: Meta,
    #[serde(flatten)]
    pub expanded: Map<String, Value>,
}

impl EntityRef {
    /// Builds a reference to `{base}/{path}/{id}`.
    #[must_use]
    pub fn new(base: &BaseUrl, path: &str, id: &str, entity_type: &str) -> Self {
        Self::from(Meta::for_entity(base, path, id, entity_type))
    }

    /// Returns the referenced entity's id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.meta.id()
    }

    /// Returns `true` if the reference carries expanded fields.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.expanded.is_empty()
    }

    /// Returns one expanded field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.expanded.get(name)
    }

    /// Decodes the expanded entity, `meta` included.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the fields do not match `T`.
    pub fn expanded_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let mut object = self.expanded.clone();
        object.insert("meta".to_string(), serde_json::to_value(&self.meta)?);
        serde_json::from_value(Value::Object(object))
    }
}

impl From<Meta> for EntityRef {
    fn from(meta: Meta) -> Self {
        Self {
            meta,
            expanded: Map::new(),
        }
    }
}

impl Serialize for EntityRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EntityRef", 1)?;
        state.serialize_field("meta", &self.meta)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_deserializes_camel_case_and_type() {
        let meta: Meta = serde_json::from_value(json!({
            "href": "https://api.moysklad.ru/api/remap/1.2/entity/product/abc",
            "metadataHref": "https://api.moysklad.ru/api/remap/1.2/entity/product/metadata",
            "type": "product",
            "mediaType": "application/json",
            "uuidHref": "https://online.moysklad.ru/app/#good/edit?id=abc"
        }))
        .unwrap();

        assert_eq!(meta.type_name(), "product");
        assert_eq!(meta.id(), Some("abc"));
        assert!(meta.uuid_href.is_some());
        assert!(!meta.has_next_page());
    }

    #[test]
    fn test_meta_serialization_skips_empty_fields() {
        let meta = Meta::new("https://x/entity/uom/1", "uom");
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "href": "https://x/entity/uom/1",
                "type": "uom",
                "mediaType": "application/json"
            })
        );
    }

    #[test]
    fn test_meta_id_ignores_query_string() {
        let meta = Meta::new(
            "https://api.moysklad.ru/api/remap/1.2/entity/product/abc?expand=uom",
            "product",
        );
        assert_eq!(meta.id(), Some("abc"));
    }

    #[test]
    fn test_meta_id_after_picks_parent_segment() {
        let meta = Meta::new(
            "https://api.moysklad.ru/api/remap/1.2/entity/customerorder/o-1/positions/p-1",
            "customerorderposition",
        );
        assert_eq!(meta.id_after("entity/customerorder"), Some("o-1"));
        assert_eq!(meta.id_after("/entity/customerorder/o-1/positions/"), Some("p-1"));
        assert_eq!(meta.id_after("entity/demand"), None);
        assert_eq!(meta.id(), Some("p-1"));
    }

    #[test]
    fn test_meta_for_entity_builds_hrefs() {
        let meta = Meta::for_entity(&BaseUrl::default(), "/entity/store/", "s-1", "store");
        assert_eq!(
            meta.href,
            "https://api.moysklad.ru/api/remap/1.2/entity/store/s-1"
        );
        assert_eq!(
            meta.metadata_href.as_deref(),
            Some("https://api.moysklad.ru/api/remap/1.2/entity/store/metadata")
        );
    }

    #[test]
    fn test_entity_ref_writes_only_meta() {
        let reference: EntityRef = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/uom/1", "type": "uom"},
            "name": "pcs",
            "code": "796"
        }))
        .unwrap();

        assert!(reference.is_expanded());
        assert_eq!(reference.field("name"), Some(&json!("pcs")));
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({"meta": {"href": "https://x/entity/uom/1", "type": "uom"}})
        );
    }

    #[test]
    fn test_entity_ref_expanded_as_includes_meta() {
        #[derive(Deserialize)]
        struct Named {
            meta: Meta,
            name: String,
        }

        let reference: EntityRef = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/store/9", "type": "store"},
            "name": "Main"
        }))
        .unwrap();

        let named: Named = reference.expanded_as().unwrap();
        assert_eq!(named.name, "Main");
        assert_eq!(named.meta.id(), Some("9"));
    }

    #[test]
    fn test_collapsed_ref_is_not_expanded() {
        let reference = EntityRef::new(&BaseUrl::default(), "entity/group", "g", "group");
        assert!(!reference.is_expanded());
        assert_eq!(reference.id(), Some("g"));
    }
}
