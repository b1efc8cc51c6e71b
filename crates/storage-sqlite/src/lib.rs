//! SQLite storage implementation for Freightline.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `freightline-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!      core (domain)
//!            │
//!            ▼
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod assignments;
pub mod companies;
pub mod representatives;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from freightline-core for convenience
pub use freightline_core::errors::{DatabaseError, Error, Result};
