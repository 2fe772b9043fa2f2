//! Counterparty repository with its nested contact persons and bank accounts.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::RestClient;
use crate::query::QueryBuilder;
use crate::repositories::single;
use crate::rest::resources::{BankAccount, ContactPerson, Counterparty, Note};
use crate::rest::{Entity, EntityRepository, ResourceError, ResourceResponse};

/// Counterparties (`entity/counterparty`).
///
/// # Example
///
/// ```rust,ignore
/// use moysklad_api::rest::resources::ContactPerson;
///
/// let branches = client.counterparties.find_by_inn("7736207543").await?;
/// if let Some(id) = branches.first().and_then(|c| c.id.clone()) {
///     let person = ContactPerson {
///         name: Some("Anna".to_string()),
///         email: Some("anna@example.com".to_string()),
///         ..ContactPerson::default()
///     };
///     client.counterparties.add_contact_person(&id, &person).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CounterpartyRepository {
    inner: EntityRepository<Counterparty>,
}

impl CounterpartyRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the repository of one counterparty's contact persons.
    #[must_use]
    pub fn contact_persons_of(&self, counterparty_id: &str) -> EntityRepository<ContactPerson> {
        self.nested(counterparty_id, ContactPerson::PATH)
    }

    /// Returns the repository of one counterparty's bank accounts.
    #[must_use]
    pub fn bank_accounts_of(&self, counterparty_id: &str) -> EntityRepository<BankAccount> {
        self.nested(counterparty_id, BankAccount::PATH)
    }

    /// Returns the repository of one counterparty's notes.
    #[must_use]
    pub fn notes_of(&self, counterparty_id: &str) -> EntityRepository<Note> {
        self.nested(counterparty_id, Note::PATH)
    }

    /// Lists the contact persons of a counterparty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the counterparty does not exist.
    pub async fn contact_persons(
        &self,
        counterparty_id: &str,
    ) -> Result<ResourceResponse<Vec<ContactPerson>>, ResourceError> {
        self.contact_persons_of(counterparty_id).find_all(None).await
    }

    /// Adds a contact person and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// person.
    pub async fn add_contact_person(
        &self,
        counterparty_id: &str,
        person: &ContactPerson,
    ) -> Result<ContactPerson, ResourceError> {
        let created = self
            .contact_persons_of(counterparty_id)
            .create_bulk(std::slice::from_ref(person))
            .await?;
        single(created)
    }

    /// Updates a contact person identified by its `id` or `meta.href`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the person has no id.
    pub async fn update_contact_person(
        &self,
        counterparty_id: &str,
        person: &ContactPerson,
    ) -> Result<ContactPerson, ResourceError> {
        self.contact_persons_of(counterparty_id).update(person).await
    }

    /// Lists the bank accounts of a counterparty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the counterparty does not exist.
    pub async fn bank_accounts(
        &self,
        counterparty_id: &str,
    ) -> Result<ResourceResponse<Vec<BankAccount>>, ResourceError> {
        self.bank_accounts_of(counterparty_id).find_all(None).await
    }

    /// Adds a bank account and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// account.
    pub async fn add_bank_account(
        &self,
        counterparty_id: &str,
        account: &BankAccount,
    ) -> Result<BankAccount, ResourceError> {
        let created = self
            .bank_accounts_of(counterparty_id)
            .create_bulk(std::slice::from_ref(account))
            .await?;
        single(created)
    }

    /// Lists the notes of a counterparty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the counterparty does not exist.
    pub async fn notes(
        &self,
        counterparty_id: &str,
    ) -> Result<ResourceResponse<Vec<Note>>, ResourceError> {
        self.notes_of(counterparty_id).find_all(None).await
    }

    /// Adds a note and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// note.
    pub async fn add_note(&self, counterparty_id: &str, note: &Note) -> Result<Note, ResourceError> {
        self.notes_of(counterparty_id).create(note).await
    }

    /// Finds every counterparty registered under a taxpayer number.
    ///
    /// Branches of one company share the INN and differ by KPP, so several
    /// rows may match.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn find_by_inn(&self, inn: &str) -> Result<Vec<Counterparty>, ResourceError> {
        self.find_by_field("inn", inn).await
    }

    /// Finds counterparties by phone number.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn find_by_phone(&self, phone: &str) -> Result<Vec<Counterparty>, ResourceError> {
        self.find_by_field("phone", phone).await
    }

    /// Finds counterparties by email address.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] mapped from the response status.
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Counterparty>, ResourceError> {
        self.find_by_field("email", email).await
    }

    async fn find_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Vec<Counterparty>, ResourceError> {
        let query = QueryBuilder::new().filter_eq(field, value);
        self.fetch_all(Some(&query)).await
    }
}

impl Deref for CounterpartyRepository {
    type Target = EntityRepository<Counterparty>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::config::MoySkladConfig;

    #[test]
    fn test_nested_paths() {
        let config = MoySkladConfig::builder()
            .credentials(Credentials::token("t").unwrap())
            .build()
            .unwrap();
        let repo = CounterpartyRepository::new(Arc::new(RestClient::new(&config).unwrap()));

        assert_eq!(repo.path(), "entity/counterparty");
        assert_eq!(
            repo.contact_persons_of("c-1").path(),
            "entity/counterparty/c-1/contactpersons"
        );
        assert_eq!(repo.bank_accounts_of("c-1").path(), "entity/counterparty/c-1/accounts");
        assert_eq!(repo.notes_of("c-1").path(), "entity/counterparty/c-1/notes");
    }
}
