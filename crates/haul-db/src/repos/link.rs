//! Link store: product-to-classification rows, the unlinked view, and the
//! transactional bulk update.

use haul_core::entities::{FreightData, LinkRecord, LinkUpdate, UnlinkedProduct};
use haul_core::errors::LinkUpdateError;

use crate::error::DatabaseError;
use crate::repos::classification::row_to_classification;
use crate::repos::product::row_to_product;
use crate::service::FreightService;

const SELECT_COLS: &str = "link_id, product_id, classification_id";

fn row_to_link(row: &libsql::Row, offset: i32) -> Result<LinkRecord, DatabaseError> {
    Ok(LinkRecord {
        link_id: row.get(offset)?,
        product_id: row.get(offset + 1)?,
        classification_id: row.get::<Option<i64>>(offset + 2)?,
    })
}

fn row_to_unlinked(row: &libsql::Row) -> Result<UnlinkedProduct, DatabaseError> {
    Ok(UnlinkedProduct {
        link_id: row.get(0)?,
        product_id: row.get(1)?,
        sku: row.get(2)?,
        name: row.get(3)?,
    })
}

async fn row_exists(
    conn: &libsql::Connection,
    sql: &str,
    id: i64,
) -> Result<bool, DatabaseError> {
    let mut rows = conn.query(sql, [id]).await?;
    Ok(rows.next().await?.is_some())
}

/// Apply every update on `conn`, stopping at the first bad reference.
async fn apply_link_updates(
    conn: &libsql::Connection,
    updates: &[LinkUpdate],
) -> Result<(), LinkUpdateError> {
    for update in updates {
        let known = row_exists(
            conn,
            "SELECT 1 FROM freight_classifications WHERE classification_id = ?1",
            update.classification_id,
        )
        .await?;
        if !known {
            return Err(LinkUpdateError::UnknownClassification {
                link_id: update.link_id,
                classification_id: update.classification_id,
            });
        }

        let changed = conn
            .execute(
                "UPDATE product_freight_links SET classification_id = ?1 WHERE link_id = ?2",
                libsql::params![update.classification_id, update.link_id],
            )
            .await
            .map_err(DatabaseError::from)?;
        if changed == 0 {
            return Err(LinkUpdateError::UnknownLink {
                link_id: update.link_id,
            });
        }
    }
    Ok(())
}

impl FreightService {
    /// Return the link row for `product_id`, creating an unlinked one if the
    /// product has none. A product never has more than one link row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the product does not exist (foreign key) or
    /// the query fails.
    pub async fn ensure_link(&self, product_id: i64) -> Result<LinkRecord, DatabaseError> {
        let created = self
            .db()
            .conn()
            .execute(
                "INSERT INTO product_freight_links (product_id) VALUES (?1)
                 ON CONFLICT (product_id) DO NOTHING",
                [product_id],
            )
            .await?;

        let link = self
            .get_link_for_product(product_id)
            .await?
            .ok_or(DatabaseError::NoResult)?;
        if created > 0 {
            tracing::debug!(link_id = link.link_id, product_id, "unlinked row created");
        }
        Ok(link)
    }

    /// The link row for a product, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_link_for_product(
        &self,
        product_id: i64,
    ) -> Result<Option<LinkRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM product_freight_links WHERE product_id = ?1"
                ),
                [product_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_link(&row, 0)?)),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_links(&self) -> Result<Vec<LinkRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM product_freight_links ORDER BY link_id"),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_link(&row, 0)?);
        }
        Ok(results)
    }

    /// Products whose link row has no classification, ordered by product id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_unlinked_products(&self) -> Result<Vec<UnlinkedProduct>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT l.link_id, p.product_id, p.sku, p.name
                 FROM products p
                 JOIN product_freight_links l ON l.product_id = p.product_id
                 WHERE l.classification_id IS NULL
                 ORDER BY p.product_id, l.link_id",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_unlinked(&row)?);
        }
        Ok(results)
    }

    /// Point each link at its classification, all or nothing.
    ///
    /// Runs in one transaction. Every classification id and link id is
    /// checked inside it; the first unknown reference rolls the whole batch
    /// back.
    ///
    /// # Errors
    ///
    /// - `LinkUpdateError::EmptyBatch` for an empty slice (no store call is made)
    /// - `LinkUpdateError::UnknownClassification` / `UnknownLink` for bad references
    /// - `LinkUpdateError::Store` if the database fails
    pub async fn bulk_update_links(&self, updates: &[LinkUpdate]) -> Result<(), LinkUpdateError> {
        if updates.is_empty() {
            return Err(LinkUpdateError::EmptyBatch);
        }

        let tx = self
            .db()
            .conn()
            .transaction()
            .await
            .map_err(DatabaseError::from)?;

        match apply_link_updates(&tx, updates).await {
            Ok(()) => {
                tx.commit().await.map_err(DatabaseError::from)?;
                tracing::debug!(count = updates.len(), "link batch committed");
                Ok(())
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, "link batch rollback failed");
                }
                tracing::warn!(%error, count = updates.len(), "link batch rejected");
                Err(error)
            }
        }
    }

    /// Product, link, and classification for a linked SKU.
    ///
    /// Returns `None` when the SKU is unknown or not yet linked.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn freight_data_for_sku(&self, sku: &str) -> Result<Option<FreightData>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT p.product_id, p.sku, p.name, p.packaging_type, p.unit_container_type,
                        l.link_id, l.product_id, l.classification_id,
                        c.classification_id, c.description, c.nmfc, c.freight_class,
                        c.hazardous, c.hazard_id, c.packing_group, c.sub
                 FROM products p
                 JOIN product_freight_links l ON l.product_id = p.product_id
                 JOIN freight_classifications c ON c.classification_id = l.classification_id
                 WHERE p.sku = ?1
                 ORDER BY l.link_id
                 LIMIT 1",
                [sku],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(FreightData {
                product: row_to_product(&row, 0)?,
                link: row_to_link(&row, 5)?,
                classification: row_to_classification(&row, 8)?,
            })),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{seed_classification, seed_unlinked, test_service};

    #[tokio::test]
    async fn ensure_link_is_idempotent() {
        let svc = test_service().await;
        let (product, link) = seed_unlinked(&svc, "A1", "Widget").await;
        let again = svc.ensure_link(product.product_id).await.unwrap();
        assert_eq!(again, link);
        assert_eq!(svc.list_links().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ensure_link_for_missing_product_fails() {
        let svc = test_service().await;
        assert!(svc.ensure_link(999).await.is_err());
    }

    #[tokio::test]
    async fn product_holds_at_most_one_link_row() {
        let svc = test_service().await;
        let class_id = seed_classification(&svc, "Acid").await;
        let (product, link) = seed_unlinked(&svc, "A1", "Widget").await;

        let second = svc
            .db()
            .conn()
            .execute(
                "INSERT INTO product_freight_links (product_id) VALUES (?1)",
                [product.product_id],
            )
            .await;
        assert!(second.is_err(), "a second link row for one product must be refused");

        svc.bulk_update_links(&[LinkUpdate {
            link_id: link.link_id,
            classification_id: class_id,
        }])
        .await
        .unwrap();
        let ensured = svc.ensure_link(product.product_id).await.unwrap();
        assert_eq!(ensured.link_id, link.link_id);
        assert_eq!(ensured.classification_id, Some(class_id));
        assert_eq!(svc.list_unlinked_products().await.unwrap(), vec![]);
        assert_eq!(svc.list_links().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unlinked_view_excludes_linked_rows() {
        let svc = test_service().await;
        let class_id = seed_classification(&svc, "Acid").await;
        let (_, a) = seed_unlinked(&svc, "A1", "Widget").await;
        let (b_product, b) = seed_unlinked(&svc, "B2", "Gadget").await;

        svc.bulk_update_links(&[LinkUpdate {
            link_id: a.link_id,
            classification_id: class_id,
        }])
        .await
        .unwrap();

        let unlinked = svc.list_unlinked_products().await.unwrap();
        assert_eq!(
            unlinked,
            vec![UnlinkedProduct {
                link_id: b.link_id,
                product_id: b_product.product_id,
                sku: "B2".into(),
                name: "Gadget".into(),
            }]
        );
    }

    #[tokio::test]
    async fn products_without_link_rows_are_not_listed() {
        let svc = test_service().await;
        svc.ensure_product("LONE", "No link row").await.unwrap();
        assert!(svc.list_unlinked_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bulk_update_is_all_or_nothing() {
        let svc = test_service().await;
        let class_id = seed_classification(&svc, "Acid").await;
        let (_, a) = seed_unlinked(&svc, "A1", "Widget").await;
        let (_, b) = seed_unlinked(&svc, "B2", "Gadget").await;

        let result = svc
            .bulk_update_links(&[
                LinkUpdate {
                    link_id: a.link_id,
                    classification_id: class_id,
                },
                LinkUpdate {
                    link_id: b.link_id,
                    classification_id: 999_999,
                },
            ])
            .await;

        assert_eq!(
            result,
            Err(LinkUpdateError::UnknownClassification {
                link_id: b.link_id,
                classification_id: 999_999,
            })
        );
        let links = svc.list_links().await.unwrap();
        assert!(links.iter().all(|l| l.classification_id.is_none()));
    }

    #[tokio::test]
    async fn unknown_link_rolls_back_batch() {
        let svc = test_service().await;
        let class_id = seed_classification(&svc, "Acid").await;
        let (_, a) = seed_unlinked(&svc, "A1", "Widget").await;

        let result = svc
            .bulk_update_links(&[
                LinkUpdate {
                    link_id: a.link_id,
                    classification_id: class_id,
                },
                LinkUpdate {
                    link_id: a.link_id + 40,
                    classification_id: class_id,
                },
            ])
            .await;

        assert_eq!(
            result,
            Err(LinkUpdateError::UnknownLink {
                link_id: a.link_id + 40
            })
        );
        assert_eq!(svc.list_unlinked_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn connection_usable_after_rollback() {
        let svc = test_service().await;
        let class_id = seed_classification(&svc, "Acid").await;
        let (_, a) = seed_unlinked(&svc, "A1", "Widget").await;

        let bad = LinkUpdate {
            link_id: a.link_id,
            classification_id: class_id + 1,
        };
        assert!(svc.bulk_update_links(&[bad]).await.is_err());

        let good = LinkUpdate {
            link_id: a.link_id,
            classification_id: class_id,
        };
        svc.bulk_update_links(&[good]).await.unwrap();
        assert!(svc.list_unlinked_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let svc = test_service().await;
        assert_eq!(
            svc.bulk_update_links(&[]).await,
            Err(LinkUpdateError::EmptyBatch)
        );
    }

    #[tokio::test]
    async fn deleting_classification_unlinks_products() {
        let svc = test_service().await;
        let class_id = seed_classification(&svc, "Acid").await;
        let (_, a) = seed_unlinked(&svc, "A1", "Widget").await;
        svc.bulk_update_links(&[LinkUpdate {
            link_id: a.link_id,
            classification_id: class_id,
        }])
        .await
        .unwrap();
        assert!(svc.list_unlinked_products().await.unwrap().is_empty());

        svc.delete_classifications(&[class_id]).await.unwrap();
        assert_eq!(svc.list_unlinked_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn freight_data_joins_all_three_tables() {
        let svc = test_service().await;
        let class_id = seed_classification(&svc, "Acid").await;
        let (product, link) = seed_unlinked(&svc, "A1", "Widget").await;

        assert!(svc.freight_data_for_sku("A1").await.unwrap().is_none());

        svc.bulk_update_links(&[LinkUpdate {
            link_id: link.link_id,
            classification_id: class_id,
        }])
        .await
        .unwrap();

        let data = svc.freight_data_for_sku("A1").await.unwrap().unwrap();
        assert_eq!(data.product, product);
        assert_eq!(data.link.classification_id, Some(class_id));
        assert_eq!(data.classification.classification_id, class_id);
        assert_eq!(data.classification.description.as_deref(), Some("Acid"));
    }
}
