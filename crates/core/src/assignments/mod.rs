//! Assignments module - the sales rotation balancer.
//!
//! When a shipper company signs up it is handed to the next eligible sales
//! representative in a durable round-robin. The rotation state lives in a
//! single persisted cursor row advanced with a compare-and-swap, so every
//! service instance sharing the database observes the same rotation.

mod assignments_errors;
mod assignments_model;
mod assignments_service;
mod assignments_traits;


// Re-export the public interface
pub use assignments_errors::AssignmentError;
pub use assignments_model::{CompanyAssignment, CursorAdvance, NewAssignment, RotationCursor};
pub use assignments_service::AssignmentService;
pub use assignments_traits::{AssignmentRepositoryTrait, AssignmentServiceTrait};
