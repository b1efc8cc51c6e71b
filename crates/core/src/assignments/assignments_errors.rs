//! Assignment-specific error types.

use thiserror::Error;

/// Errors raised by the assignment balancer.
///
/// `AlreadyAssigned` is benign for callers driven by at-least-once
/// company-creation events; everything else needs operator attention or a
/// retry at the infrastructure level.
#[derive(Error, Debug)]
pub enum AssignmentError {
    /// No representative is currently marked eligible for the rotation.
    #[error("No eligible sales representatives available for assignment")]
    NoEligibleReps,

    /// The company already owns an assignment record.
    #[error("Company '{company_id}' is already assigned to a representative")]
    AlreadyAssigned { company_id: String },

    /// The company referenced by the caller does not exist.
    #[error("Company '{company_id}' not found")]
    CompanyNotFound { company_id: String },

    /// The rotation cursor moved under us between read and write.
    /// Retried internally a bounded number of times.
    #[error("Rotation cursor was advanced concurrently")]
    RotationConflict,
}
