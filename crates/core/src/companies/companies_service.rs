use log::{debug, error};
use std::sync::Arc;

use super::companies_model::{Company, NewCompany};
use super::companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};
use crate::assignments::{AssignmentError, AssignmentServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing shipper companies
pub struct CompanyService {
    repository: Arc<dyn CompanyRepositoryTrait>,
    assignment_service: Arc<dyn AssignmentServiceTrait>,
}

impl CompanyService {
    /// Creates a new CompanyService instance
    pub fn new(
        repository: Arc<dyn CompanyRepositoryTrait>,
        assignment_service: Arc<dyn AssignmentServiceTrait>,
    ) -> Self {
        Self {
            repository,
            assignment_service,
        }
    }
}

#[async_trait::async_trait]
impl CompanyServiceTrait for CompanyService {
    /// Registers a new company and triggers the sales rotation once.
    ///
    /// Signup must not block on sales availability: a failed assignment is
    /// logged for operators and the company is returned unassigned.
    async fn create_company(&self, new_company: NewCompany) -> Result<Company> {
        new_company.validate()?;
        debug!("Creating company {}", new_company.name);

        let company = self.repository.create(new_company).await?;

        match self.assignment_service.assign(&company.id).await {
            Ok(assignment) => {
                debug!(
                    "Company {} assigned to rep {}",
                    company.id, assignment.sales_rep_id
                );
            }
            // Duplicate delivery of the creation event; the first record stands.
            Err(Error::Assignment(AssignmentError::AlreadyAssigned { .. })) => {}
            Err(e) => {
                error!(
                    "Company {} created but sales assignment failed, needs manual assignment: {}",
                    company.id, e
                );
            }
        }

        Ok(company)
    }

    /// Retrieves a company by its ID
    fn get_company(&self, company_id: &str) -> Result<Company> {
        self.repository.get_by_id(company_id)
    }

    /// Lists all companies
    fn list_companies(&self) -> Result<Vec<Company>> {
        self.repository.list()
    }
}
