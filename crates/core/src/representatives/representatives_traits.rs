//! Sales representative repository and service traits.
//!
//! These traits define the contract for representative operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::representatives_model::{NewSalesRep, SalesRep, SalesRepUpdate};
use crate::errors::Result;

/// Trait defining the contract for SalesRep repository operations.
///
/// Implementations of this trait handle the persistence of representative
/// data. The trait is database-agnostic - storage-specific details are
/// handled by concrete implementations.
#[async_trait]
pub trait SalesRepRepositoryTrait: Send + Sync {
    /// Creates a new representative.
    async fn create(&self, new_rep: NewSalesRep) -> Result<SalesRep>;

    /// Updates an existing representative.
    async fn update(&self, rep_update: SalesRepUpdate) -> Result<SalesRep>;

    /// Retrieves a representative by its ID.
    fn get_by_id(&self, rep_id: &str) -> Result<SalesRep>;

    /// Lists representatives, optionally filtered by eligibility.
    fn list(&self, is_eligible_filter: Option<bool>) -> Result<Vec<SalesRep>>;
}

/// Trait defining the contract for SalesRep service operations.
#[async_trait]
pub trait SalesRepServiceTrait: Send + Sync {
    /// Registers a new representative with business validation.
    async fn create_rep(&self, new_rep: NewSalesRep) -> Result<SalesRep>;

    /// Updates an existing representative with business validation.
    async fn update_rep(&self, rep_update: SalesRepUpdate) -> Result<SalesRep>;

    /// Marks a representative as eligible or ineligible for the rotation.
    async fn set_eligibility(&self, rep_id: &str, is_eligible: bool) -> Result<SalesRep>;

    /// Retrieves a representative by ID.
    fn get_rep(&self, rep_id: &str) -> Result<SalesRep>;

    /// Lists representatives with an optional eligibility filter.
    fn list_reps(&self, is_eligible_filter: Option<bool>) -> Result<Vec<SalesRep>>;

    /// Gets only representatives eligible for assignment.
    fn get_eligible_reps(&self) -> Result<Vec<SalesRep>>;
}
