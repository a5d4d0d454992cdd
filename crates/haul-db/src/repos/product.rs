//! Product store: list and find-or-create by SKU.

use haul_core::entities::ProductRecord;

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::FreightService;

const SELECT_COLS: &str = "product_id, sku, name, packaging_type, unit_container_type";

/// Result of [`FreightService::ensure_product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created(ProductRecord),
    Existing(ProductRecord),
}

impl EnsureOutcome {
    #[must_use]
    pub fn into_product(self) -> ProductRecord {
        match self {
            Self::Created(product) | Self::Existing(product) => product,
        }
    }

    #[must_use]
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

pub(crate) fn row_to_product(row: &libsql::Row, offset: i32) -> Result<ProductRecord, DatabaseError> {
    Ok(ProductRecord {
        product_id: row.get(offset)?,
        sku: row.get(offset + 1)?,
        name: row.get(offset + 2)?,
        packaging_type: get_opt_string(row, offset + 3)?,
        unit_container_type: get_opt_string(row, offset + 4)?,
    })
}

impl FreightService {
    /// Return every product, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM products ORDER BY product_id"),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_product(&row, 0)?);
        }
        Ok(results)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_product_by_sku(&self, sku: &str) -> Result<Option<ProductRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM products WHERE sku = ?1"),
                [sku],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_product(&row, 0)?)),
            None => Ok(None),
        }
    }

    /// Create a product for `sku` unless one already exists.
    ///
    /// Optional fields of a new product start as NULL. An existing product is
    /// returned unchanged, even if `name` differs.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidInput` for a blank SKU, or
    /// `DatabaseError` if the insert or lookup fails.
    pub async fn ensure_product(&self, sku: &str, name: &str) -> Result<EnsureOutcome, DatabaseError> {
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(DatabaseError::InvalidInput("sku must not be empty".into()));
        }

        let changed = self
            .db()
            .conn()
            .execute(
                "INSERT INTO products (sku, name) VALUES (?1, ?2) ON CONFLICT(sku) DO NOTHING",
                libsql::params![sku, name],
            )
            .await?;

        let product = self
            .get_product_by_sku(sku)
            .await?
            .ok_or(DatabaseError::NoResult)?;

        if changed == 0 {
            tracing::debug!(sku, "product already exists");
            Ok(EnsureOutcome::Existing(product))
        } else {
            tracing::info!(sku, product_id = product.product_id, "product added");
            Ok(EnsureOutcome::Created(product))
        }
    }
}
