//! Database error types for haul-db.

use haul_core::errors::{LinkUpdateError, StoreError};
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Caller supplied a value the store cannot accept.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        Self::new(error.to_string())
    }
}

impl From<DatabaseError> for LinkUpdateError {
    fn from(error: DatabaseError) -> Self {
        Self::Store(error.into())
    }
}
