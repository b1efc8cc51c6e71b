use log::debug;
use std::sync::Arc;

use super::representatives_model::{NewSalesRep, SalesRep, SalesRepUpdate};
use super::representatives_traits::{SalesRepRepositoryTrait, SalesRepServiceTrait};
use crate::errors::Result;

/// Service for managing sales representatives
pub struct SalesRepService {
    repository: Arc<dyn SalesRepRepositoryTrait>,
}

impl SalesRepService {
    /// Creates a new SalesRepService instance
    pub fn new(repository: Arc<dyn SalesRepRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl SalesRepServiceTrait for SalesRepService {
    /// Registers a new sales representative
    async fn create_rep(&self, new_rep: NewSalesRep) -> Result<SalesRep> {
        new_rep.validate()?;
        debug!("Creating sales rep {}", new_rep.email);
        self.repository.create(new_rep).await
    }

    /// Updates an existing representative
    async fn update_rep(&self, rep_update: SalesRepUpdate) -> Result<SalesRep> {
        rep_update.validate()?;
        self.repository.update(rep_update).await
    }

    /// Flips the eligibility flag, leaving the rest of the record untouched
    async fn set_eligibility(&self, rep_id: &str, is_eligible: bool) -> Result<SalesRep> {
        let existing = self.repository.get_by_id(rep_id)?;
        debug!(
            "Setting eligibility of rep {} to {}",
            existing.id, is_eligible
        );
        self.repository
            .update(SalesRepUpdate {
                id: existing.id,
                first_name: existing.first_name,
                last_name: existing.last_name,
                email: existing.email,
                is_eligible,
            })
            .await
    }

    /// Retrieves a representative by its ID
    fn get_rep(&self, rep_id: &str) -> Result<SalesRep> {
        self.repository.get_by_id(rep_id)
    }

    /// Lists representatives with optional eligibility filtering
    fn list_reps(&self, is_eligible_filter: Option<bool>) -> Result<Vec<SalesRep>> {
        self.repository.list(is_eligible_filter)
    }

    /// Lists only representatives participating in the rotation
    fn get_eligible_reps(&self) -> Result<Vec<SalesRep>> {
        self.list_reps(Some(true))
    }
}
