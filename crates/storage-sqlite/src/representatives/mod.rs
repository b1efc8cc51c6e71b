//! SQLite storage implementation for sales representatives.

mod model;
mod repository;

pub use model::SalesRepDB;
pub use repository::SalesRepRepository;
