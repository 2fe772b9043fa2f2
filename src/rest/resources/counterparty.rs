//! Counterparties with their contact persons and bank accounts.
//!
//! Contact persons and bank accounts are nested collections:
//! `entity/counterparty/{id}/contactpersons` and
//! `entity/counterparty/{id}/accounts`. Their `PATH` is the collection segment;
//! repositories reach them through
//! [`EntityRepository::nested`](crate::rest::EntityRepository::nested).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::{datetime, Attribute, Entity, EntityRef, HasAttributes, Meta};

use super::common::Address;
use super::enums::CompanyType;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
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
    pub legal_middle_name: Option<String>,
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
    pub certificate_number: Option<String>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_date: Option<NaiveDateTime>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_card_number: Option<String>,
    #[serde(skip_serializing)]
    pub sales_amount: Option<f64>,
    #[serde(skip_serializing)]
    pub bonus_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_program: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub accounts: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub contactpersons: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub notes: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub files: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,
}

impl Counterparty {
    /// Creates an unsaved counterparty with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if the counterparty carries the tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().flatten().any(|t| t == tag)
    }
}

impl Entity for Counterparty {
    const NAME: &'static str = "Counterparty";
    const TYPE: &'static str = "counterparty";
    const PATH: &'static str = "entity/counterparty";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasAttributes for Counterparty {
    fn attributes(&self) -> Option<&Vec<Attribute>> {
        self.attributes.as_ref()
    }

    fn attributes_mut(&mut self) -> &mut Option<Vec<Attribute>> {
        &mut self.attributes
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing)]
    pub agent: Option<EntityRef>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub updated: Option<NaiveDateTime>,
}

impl Entity for ContactPerson {
    const NAME: &'static str = "ContactPerson";
    const TYPE: &'static str = "contactperson";
    const PATH: &'static str = "contactpersons";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A settlement account of a counterparty or an organization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correspondent_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing)]
    pub agent: Option<EntityRef>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub updated: Option<NaiveDateTime>,
}

impl Entity for BankAccount {
    const NAME: &'static str = "BankAccount";
    const TYPE: &'static str = "account";
    const PATH: &'static str = "accounts";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A free-text event in a counterparty's history (`{id}/notes`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing)]
    pub id: Option<String>,
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub agent: Option<EntityRef>,
    #[serde(skip_serializing)]
    pub author: Option<EntityRef>,
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "datetime::option::deserialize"
    )]
    pub created: Option<NaiveDateTime>,
}

impl Note {
    /// Creates a note with the given text.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

impl Entity for Note {
    const NAME: &'static str = "Note";
    const TYPE: &'static str = "note";
    const PATH: &'static str = "notes";

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
    use serde_json::json;

    #[test]
    fn test_counterparty_deserialization() {
        let counterparty: Counterparty = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/12a8b923-692c-11e6-8a84-bae500000053",
                "type": "counterparty"
            },
            "id": "12a8b923-692c-11e6-8a84-bae500000053",
            "created": "2023-08-24 17:31:50.000",
            "name": "OOO Horns and Hooves",
            "companyType": "legal",
            "inn": "7736570901",
            "kpp": "773601001",
            "tags": ["wholesale", "moscow"],
            "salesAmount": 125000.5,
            "legalAddressFull": {"postalCode": "125009", "city": "Moscow"},
            "accounts": {"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/12a8b923-692c-11e6-8a84-bae500000053/accounts", "type": "account", "size": 1}},
            "state": {"meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/metadata/states/s1", "type": "state"}}
        }))
        .unwrap();

        assert_eq!(counterparty.company_type, Some(CompanyType::Legal));
        assert_eq!(counterparty.inn.as_deref(), Some("7736570901"));
        assert!(counterparty.has_tag("wholesale"));
        assert!(counterparty.created.is_some());
        assert_eq!(counterparty.accounts.as_ref().unwrap().meta.size, Some(1));
        assert_eq!(
            counterparty.legal_address_full.as_ref().unwrap().city.as_deref(),
            Some("Moscow")
        );
    }

    #[test]
    fn test_counterparty_serialization_omits_read_only_fields() {
        let counterparty: Counterparty = serde_json::from_value(json!({
            "id": "c1",
            "name": "Shop",
            "salesAmount": 10.0,
            "bonusPoints": 3,
            "created": "2023-08-24 17:31:50.000",
            "accounts": {"meta": {"href": "h"}}
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&counterparty).unwrap(),
            json!({"name": "Shop"})
        );
    }

    #[test]
    fn test_individual_birth_date_is_written() {
        let counterparty = Counterparty {
            company_type: Some(CompanyType::Individual),
            birth_date: crate::rest::datetime::parse("1990-05-01 00:00:00"),
            ..Counterparty::named("Ivan")
        };
        let body = serde_json::to_value(&counterparty).unwrap();
        assert_eq!(body["companyType"], "individual");
        assert_eq!(body["birthDate"], "1990-05-01 00:00:00.000");
    }

    #[test]
    fn test_nested_entity_ids_come_from_href() {
        let person: ContactPerson = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/c1/contactpersons/p1",
                "type": "contactperson"
            },
            "name": "Anna"
        }))
        .unwrap();
        assert_eq!(person.entity_id().as_deref(), Some("p1"));

        let account: BankAccount = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/c1/accounts/a1",
                "type": "account"
            },
            "accountNumber": "40702810000000000001",
            "isDefault": true
        }))
        .unwrap();
        assert_eq!(account.entity_id().as_deref(), Some("a1"));
        assert_eq!(account.is_default, Some(true));
    }

    #[test]
    fn test_note_writes_only_description() {
        let note: Note = serde_json::from_value(json!({
            "meta": {"href": "https://api.moysklad.ru/api/remap/1.2/entity/counterparty/c-1/notes/n-1", "type": "note"},
            "id": "n-1",
            "created": "2024-02-10 09:15:00.000",
            "description": "Called about the delivery"
        }))
        .unwrap();
        assert!(note.created.is_some());
        assert_eq!(note.entity_id().as_deref(), Some("n-1"));

        let body = serde_json::to_value(Note::new("Follow up next week")).unwrap();
        assert_eq!(body, json!({"description": "Follow up next week"}));
    }
}
