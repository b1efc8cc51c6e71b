use log::{debug, warn};
use std::sync::Arc;

use super::assignments_errors::AssignmentError;
use super::assignments_model::{CompanyAssignment, CursorAdvance, NewAssignment};
use super::assignments_traits::{AssignmentRepositoryTrait, AssignmentServiceTrait};
use crate::companies::CompanyRepositoryTrait;
use crate::constants::MAX_ASSIGN_ATTEMPTS;
use crate::errors::{DatabaseError, Error, Result};
use crate::representatives::{SalesRep, SalesRepRepositoryTrait};

/// The rotation balancer.
///
/// Reads the eligible-representative roster and the rotation cursor, computes
/// the next pick in stable id order, and hands the conditional write to the
/// repository. A lost cursor race is retried up to `MAX_ASSIGN_ATTEMPTS`.
pub struct AssignmentService {
    assignment_repository: Arc<dyn AssignmentRepositoryTrait>,
    rep_repository: Arc<dyn SalesRepRepositoryTrait>,
    company_repository: Arc<dyn CompanyRepositoryTrait>,
}

impl AssignmentService {
    /// Creates a new AssignmentService instance
    pub fn new(
        assignment_repository: Arc<dyn AssignmentRepositoryTrait>,
        rep_repository: Arc<dyn SalesRepRepositoryTrait>,
        company_repository: Arc<dyn CompanyRepositoryTrait>,
    ) -> Self {
        Self {
            assignment_repository,
            rep_repository,
            company_repository,
        }
    }

    /// One read-compute-write pass. Callers retry on `RotationConflict`.
    async fn try_assign(&self, company_id: &str) -> Result<CompanyAssignment> {
        // Precondition: the company must exist. Not trusted from the caller.
        match self.company_repository.get_by_id(company_id) {
            Ok(_) => {}
            Err(Error::Database(DatabaseError::NotFound(_))) => {
                return Err(AssignmentError::CompanyNotFound {
                    company_id: company_id.to_string(),
                }
                .into());
            }
            Err(e) => return Err(e),
        }

        if self
            .assignment_repository
            .get_by_company_id(company_id)?
            .is_some()
        {
            return Err(AssignmentError::AlreadyAssigned {
                company_id: company_id.to_string(),
            }
            .into());
        }

        let mut reps = self.rep_repository.list(Some(true))?;
        if reps.is_empty() {
            return Err(AssignmentError::NoEligibleReps.into());
        }
        // Rotation order is fixed by id, independent of fetch order.
        reps.sort_by(|a, b| a.id.cmp(&b.id));

        let cursor = self.assignment_repository.get_cursor()?;
        let next = next_in_rotation(&reps, cursor.last_rep_id.as_deref());
        debug!(
            "Assigning company {} to rep {} (cursor v{})",
            company_id, next.id, cursor.version
        );

        let result = self
            .assignment_repository
            .record(
                NewAssignment {
                    company_id: company_id.to_string(),
                    sales_rep_id: next.id.clone(),
                },
                CursorAdvance {
                    expected_version: cursor.version,
                    rep_id: next.id.clone(),
                },
            )
            .await;

        match result {
            // A racing invocation for the same company won the insert.
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                Err(AssignmentError::AlreadyAssigned {
                    company_id: company_id.to_string(),
                }
                .into())
            }
            other => other,
        }
    }
}

/// Picks the representative immediately after `last_rep_id` in the sorted
/// pool, wrapping to the front. A missing or since-deactivated last pick
/// restarts the rotation at the first representative.
fn next_in_rotation<'a>(sorted_reps: &'a [SalesRep], last_rep_id: Option<&str>) -> &'a SalesRep {
    let next_index = last_rep_id
        .and_then(|last| sorted_reps.iter().position(|rep| rep.id == last))
        .map(|i| (i + 1) % sorted_reps.len())
        .unwrap_or(0);
    &sorted_reps[next_index]
}

#[async_trait::async_trait]
impl AssignmentServiceTrait for AssignmentService {
    /// Assigns a newly created company to the next representative in rotation
    async fn assign(&self, company_id: &str) -> Result<CompanyAssignment> {
        for attempt in 1..=MAX_ASSIGN_ATTEMPTS {
            match self.try_assign(company_id).await {
                Err(Error::Assignment(AssignmentError::RotationConflict)) => {
                    warn!(
                        "Rotation cursor contention assigning company {} (attempt {}/{})",
                        company_id, attempt, MAX_ASSIGN_ATTEMPTS
                    );
                }
                other => return other,
            }
        }
        Err(Error::Database(DatabaseError::TransactionFailed(format!(
            "rotation cursor still contended after {} attempts",
            MAX_ASSIGN_ATTEMPTS
        ))))
    }

    /// Retrieves the assignment for a company, if any
    fn get_assignment_for_company(&self, company_id: &str) -> Result<Option<CompanyAssignment>> {
        self.assignment_repository.get_by_company_id(company_id)
    }

    /// Lists assignments, optionally restricted to one representative
    fn list_assignments(&self, sales_rep_filter: Option<&str>) -> Result<Vec<CompanyAssignment>> {
        self.assignment_repository.list(sales_rep_filter)
    }
}

#[cfg(test)]
mod rotation_tests {
    use super::next_in_rotation;
    use crate::representatives::SalesRep;

    fn pool(ids: &[&str]) -> Vec<SalesRep> {
        ids.iter()
            .map(|id| SalesRep {
                id: id.to_string(),
                is_eligible: true,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn first_assignment_picks_first_rep() {
        let reps = pool(&["a", "b", "c"]);
        assert_eq!(next_in_rotation(&reps, None).id, "a");
    }

    #[test]
    fn rotation_advances_and_wraps() {
        let reps = pool(&["a", "b", "c"]);
        assert_eq!(next_in_rotation(&reps, Some("a")).id, "b");
        assert_eq!(next_in_rotation(&reps, Some("b")).id, "c");
        assert_eq!(next_in_rotation(&reps, Some("c")).id, "a");
    }

    #[test]
    fn deactivated_last_rep_restarts_at_front() {
        let reps = pool(&["a", "c"]);
        assert_eq!(next_in_rotation(&reps, Some("b")).id, "a");
    }

    #[test]
    fn single_rep_pool_always_picks_it() {
        let reps = pool(&["only"]);
        assert_eq!(next_in_rotation(&reps, None).id, "only");
        assert_eq!(next_in_rotation(&reps, Some("only")).id, "only");
    }
}
