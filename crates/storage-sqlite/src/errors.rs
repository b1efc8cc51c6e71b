//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the database-agnostic error types defined in `freightline_core`.

use diesel::result::Error as DieselError;
use freightline_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `freightline_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A typed core error raised inside a storage transaction.
    ///
    /// Carried whole rather than stringified so the service layer can still
    /// match on it (the balancer retries on `RotationConflict`).
    #[error(transparent)]
    Domain(#[from] Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                info,
            )) => Error::Database(DatabaseError::ForeignKeyViolation(
                info.message().to_string(),
            )),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::Domain(e) => e,
        }
    }
}

/// Extension trait adding `.into_core()` to Diesel and r2d2 results.
///
/// Repositories call this at every query boundary so Diesel error values
/// never leak past this crate.
pub trait IntoCore<T> {
    fn into_core(self) -> freightline_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> freightline_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> freightline_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
