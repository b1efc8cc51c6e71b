//! Freightline Core - Domain entities, services, and traits.
//!
//! This crate contains the sales-assignment business logic for Freightline.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod assignments;
pub mod companies;
pub mod constants;
pub mod errors;
pub mod representatives;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
