//! # haul-db
//!
//! libSQL storage for the freight reference tables: classifications,
//! products, and the product-to-classification links.
//!
//! One [`FreightDb`] handle is opened at startup and owned by a
//! [`service::FreightService`], which every caller receives by reference.
//! Store operations are `impl FreightService` blocks under [`repos`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle for the freight tables.
///
/// Wraps a libSQL database and its single connection.
pub struct FreightDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FreightDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let freight_db = Self { db, conn };
        freight_db.run_migrations().await?;
        tracing::debug!(path, "opened freight database");
        Ok(freight_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> FreightDb {
        FreightDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["freight_classifications", "products", "product_freight_links"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO product_freight_links (product_id) VALUES (?1)",
                [42i64],
            )
            .await;
        assert!(result.is_err(), "link to a missing product should be rejected");
    }

    #[tokio::test]
    async fn file_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haul.db");
        let path = path.to_string_lossy();

        {
            let db = FreightDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO products (sku, name) VALUES ('SKU1', 'Name1')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = FreightDb::open_local(&path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM products", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
