//! The account's own legal entities, staff and warehouses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{datetime, Attribute, Entity, EntityRef, HasAttributes, Meta};

use super::common::Address;
use super::enums::CompanyType;

/// A legal entity of the account (the seller side of documents).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_address_full: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_address_full: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ogrn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ogrnip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub okpo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_vat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chief_accountant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_contract_number: Option<String>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_contract_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_egais_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fsrar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_program: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub bonus_points: Option<i64>,
    #[serde(skip_serializing)]
    pub accounts: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub files: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl Entity for Organization {
    const NAME: &'static str = "Organization";
    const TYPE: &'static str = "organization";
    const PATH: &'static str = "entity/organization";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasAttributes for Organization {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.attributes
    }
}

/// A user of the account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
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
    /// Login of the user within the account.
    #[serde(skip_serializing)]
    pub uid: Option<String>,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing)]
    pub full_name: Option<String>,
    #[serde(skip_serializing)]
    pub short_fio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Value>,
    #[serde(skip_serializing)]
    pub cashiers: Option<Vec<EntityRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl Employee {
    /// Returns the full name, composing it from the parts when the server
    /// did not send one.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(full_name) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return full_name.to_string();
        }
        [
            self.last_name.as_deref(),
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";
    const TYPE: &'static str = "employee";
    const PATH: &'static str = "entity/employee";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasAttributes for Employee {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.attributes
    }
}

/// A department; owns entities through their `group` field.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub index: Option<i64>,
}

impl Entity for Group {
    const NAME: &'static str = "Group";
    const TYPE: &'static str = "group";
    const PATH: &'static str = "entity/group";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_full: Option<Address>,
    /// Parent store for nested warehouses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub path_name: Option<String>,
    #[serde(skip_serializing)]
    pub zones: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub slots: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

impl Entity for Store {
    const NAME: &'static str = "Store";
    const TYPE: &'static str = "store";
    const PATH: &'static str = "entity/store";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasAttributes for Store {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_organization_deserialization() {
        let organization: Organization = serde_json::from_value(json!({
            "meta": {"href": "https://x/entity/organization/org-1", "type": "organization"},
            "id": "org-1",
            "name": "Acme LLC",
            "companyType": "legal",
            "inn": "7736207543",
            "payerVat": true,
            "certificateDate": "2020-01-15 00:00:00.000",
            "accounts": {"meta": {"href": "https://x/entity/organization/org-1/accounts", "type": "account"}},
            "bonusPoints": 0
        }))
        .unwrap();

        assert_eq!(organization.company_type, Some(CompanyType::Legal));
        assert_eq!(organization.inn.as_deref(), Some("7736207543"));
        assert!(organization.certificate_date.is_some());

        let body = serde_json::to_value(&organization).unwrap();
        assert!(body.get("accounts").is_none());
        assert!(body.get("bonusPoints").is_none());
        assert_eq!(body["certificateDate"], "2020-01-15 00:00:00.000");
    }

    #[test]
    fn test_employee_display_name() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "e1",
            "firstName": "Ivan",
            "lastName": "Petrov",
            "uid": "admin@acme"
        }))
        .unwrap();
        assert_eq!(employee.display_name(), "Petrov Ivan");
        assert!(serde_json::to_value(&employee).unwrap().get("uid").is_none());

        let named = Employee {
            full_name: Some("Petrov Ivan Sergeevich".to_string()),
            ..Employee::default()
        };
        assert_eq!(named.display_name(), "Petrov Ivan Sergeevich");
    }

    #[test]
    fn test_store_hierarchy_fields() {
        let store: Store = serde_json::from_value(json!({
            "id": "s1",
            "name": "Main",
            "pathName": "Warehouses",
            "parent": {"meta": {"href": "https://x/entity/store/root", "type": "store"}},
            "addressFull": {"city": "Moscow"}
        }))
        .unwrap();

        assert_eq!(store.parent.as_ref().and_then(EntityRef::id), Some("root"));
        let body = serde_json::to_value(&store).unwrap();
        assert!(body.get("pathName").is_none());
        assert_eq!(body["addressFull"]["city"], "Moscow");
    }

    #[test]
    fn test_entity_paths() {
        assert_eq!(Organization::PATH, "entity/organization");
        assert_eq!(Employee::PATH, "entity/employee");
        assert_eq!(Group::TYPE, "group");
        assert_eq!(Store::PATH, "entity/store");
    }
}
