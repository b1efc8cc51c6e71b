//! Sales representatives module - domain models, services, and traits.

mod representatives_model;
mod representatives_service;
mod representatives_traits;

#[cfg(test)]
mod representatives_model_tests;

// Re-export the public interface
pub use representatives_model::{NewSalesRep, SalesRep, SalesRepUpdate};
pub use representatives_service::SalesRepService;
pub use representatives_traits::{SalesRepRepositoryTrait, SalesRepServiceTrait};
