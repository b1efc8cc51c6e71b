//! SQLite storage implementation for company assignments and the rotation
//! cursor.

mod model;
mod repository;

pub use model::{CompanyAssignmentDB, RotationCursorDB};
pub use repository::AssignmentRepository;
