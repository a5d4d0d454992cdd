//! Service layer owning the database handle.
//!
//! `FreightService` is constructed once at startup and passed by reference to
//! every consumer. All store operations are implemented as
//! `impl FreightService` blocks in [`crate::repos`].

use crate::FreightDb;
use crate::error::DatabaseError;

/// Owns the freight database handle and hosts the store operations.
pub struct FreightService {
    db: FreightDb,
}

impl FreightService {
    /// Create a new service backed by a local database file.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = FreightDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `FreightDb`.
    #[must_use]
    pub const fn from_db(db: FreightDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &FreightDb {
        &self.db
    }
}
