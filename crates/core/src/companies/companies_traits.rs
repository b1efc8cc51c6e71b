//! Company repository and service traits.

use async_trait::async_trait;

use super::companies_model::{Company, NewCompany};
use crate::errors::Result;

/// Trait defining the contract for Company repository operations.
#[async_trait]
pub trait CompanyRepositoryTrait: Send + Sync {
    /// Creates a new company.
    async fn create(&self, new_company: NewCompany) -> Result<Company>;

    /// Retrieves a company by its ID.
    fn get_by_id(&self, company_id: &str) -> Result<Company>;

    /// Lists all companies, newest first.
    fn list(&self) -> Result<Vec<Company>>;
}

/// Trait defining the contract for Company service operations.
#[async_trait]
pub trait CompanyServiceTrait: Send + Sync {
    /// Registers a new company and hands it to the sales rotation.
    ///
    /// Company creation succeeds even when the assignment step fails; the
    /// failure is logged for operator follow-up and the balancer can be
    /// re-invoked safely later.
    async fn create_company(&self, new_company: NewCompany) -> Result<Company>;

    /// Retrieves a company by ID.
    fn get_company(&self, company_id: &str) -> Result<Company>;

    /// Lists all companies.
    fn list_companies(&self) -> Result<Vec<Company>>;
}
