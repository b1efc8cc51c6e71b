//! Assignment repository and service traits.
//!
//! These traits define the contract for the rotation balancer without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::assignments_model::{CompanyAssignment, CursorAdvance, NewAssignment, RotationCursor};
use crate::errors::Result;

/// Trait defining the contract for assignment persistence.
///
/// The store must enforce a uniqueness constraint on `company_id` and apply
/// `record` atomically: the cursor advance and the assignment insert either
/// both commit or neither does.
#[async_trait]
pub trait AssignmentRepositoryTrait: Send + Sync {
    /// Reads the rotation cursor.
    fn get_cursor(&self) -> Result<RotationCursor>;

    /// Looks up the assignment for a company, if one exists.
    fn get_by_company_id(&self, company_id: &str) -> Result<Option<CompanyAssignment>>;

    /// Lists assignments, optionally filtered by representative, newest first.
    fn list(&self, sales_rep_filter: Option<&str>) -> Result<Vec<CompanyAssignment>>;

    /// Atomically advances the cursor and inserts the assignment record.
    ///
    /// Fails with `AssignmentError::RotationConflict` when the cursor version
    /// no longer matches `cursor.expected_version`, and with
    /// `DatabaseError::UniqueViolation` when the company already has a record.
    async fn record(
        &self,
        new_assignment: NewAssignment,
        cursor: CursorAdvance,
    ) -> Result<CompanyAssignment>;
}

/// Trait defining the contract for the assignment balancer service.
#[async_trait]
pub trait AssignmentServiceTrait: Send + Sync {
    /// Picks the next representative for a newly created company and
    /// durably records the choice exactly once.
    async fn assign(&self, company_id: &str) -> Result<CompanyAssignment>;

    /// Retrieves the assignment for a company, if any.
    fn get_assignment_for_company(&self, company_id: &str) -> Result<Option<CompanyAssignment>>;

    /// Lists assignments, optionally restricted to one representative.
    fn list_assignments(&self, sales_rep_filter: Option<&str>) -> Result<Vec<CompanyAssignment>>;
}
