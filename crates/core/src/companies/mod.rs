//! Companies module - domain models, services, and traits.

mod companies_model;
mod companies_service;
mod companies_traits;

// Re-export the public interface
pub use companies_model::{Company, NewCompany};
pub use companies_service::CompanyService;
pub use companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};
