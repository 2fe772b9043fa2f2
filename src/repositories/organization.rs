//! Repositories for the account's own legal entities, staff and warehouses.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::RestClient;
use crate::repositories::single;
use crate::rest::resources::{BankAccount, Employee, Group, Organization, Store};
use crate::rest::{decode_entity, Entity, EntityRepository, ResourceError, ResourceResponse};

/// Path of the employee bound to the current credentials.
pub const CURRENT_EMPLOYEE_PATH: &str = "context/employee";

pub type StoreRepository = EntityRepository<Store>;
pub type GroupRepository = EntityRepository<Group>;

#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    inner: EntityRepository<Organization>,
}

impl OrganizationRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the repository of one organization's bank accounts.
    #[must_use]
    pub fn accounts_of(&self, organization_id: &str) -> EntityRepository<BankAccount> {
        self.nested(organization_id, BankAccount::PATH)
    }

    /// Lists the bank accounts of an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the organization does not exist.
    pub async fn accounts(
        &self,
        organization_id: &str,
    ) -> Result<ResourceResponse<Vec<BankAccount>>, ResourceError> {
        self.accounts_of(organization_id).find_all(None).await
    }

    /// Adds a bank account and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// account.
    pub async fn add_account(
        &self,
        organization_id: &str,
        account: &BankAccount,
    ) -> Result<BankAccount, ResourceError> {
        single(
            self.accounts_of(organization_id)
                .create_bulk(std::slice::from_ref(account))
                .await?,
        )
    }
}

impl Deref for OrganizationRepository {
    type Target = EntityRepository<Organization>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    inner: EntityRepository<Employee>,
}

impl EmployeeRepository {
    #[must_use]
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            inner: EntityRepository::new(client),
        }
    }

    /// Returns the employee the credentials belong to.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Authentication`] if the credentials are
    /// rejected.
    pub async fn current(&self) -> Result<Employee, ResourceError> {
        let response = self
            .client()
            .get(CURRENT_EMPLOYEE_PATH, None)
            .await
            .map_err(|e| self.error(e, None))?;
        decode_entity(response.body)
    }
}

impl Deref for EmployeeRepository {
    type Target = EntityRepository<Employee>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
