//! Classification store: list, update by id, insert-or-ignore, batch delete.

use haul_core::entities::{ClassificationRecord, NewClassification};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_bool, get_opt_string, placeholders};
use crate::service::FreightService;

const SELECT_COLS: &str =
    "classification_id, description, nmfc, freight_class, hazardous, hazard_id, packing_group, sub";

/// Result of [`FreightService::insert_classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was stored under this id.
    Inserted(i64),
    /// A row with the same natural key already exists; nothing was written.
    Duplicate,
}

pub(crate) fn row_to_classification(
    row: &libsql::Row,
    offset: i32,
) -> Result<ClassificationRecord, DatabaseError> {
    Ok(ClassificationRecord {
        classification_id: row.get(offset)?,
        description: get_opt_string(row, offset + 1)?,
        nmfc: get_opt_string(row, offset + 2)?,
        freight_class: row.get(offset + 3)?,
        hazardous: get_opt_bool(row, offset + 4)?,
        hazard_id: get_opt_string(row, offset + 5)?,
        packing_group: get_opt_string(row, offset + 6)?,
        sub: get_opt_string(row, offset + 7)?,
    })
}

impl FreightService {
    /// Return every classification, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_classifications(&self) -> Result<Vec<ClassificationRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM freight_classifications ORDER BY classification_id"
                ),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_classification(&row, 0)?);
        }
        Ok(results)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_classification(
        &self,
        classification_id: i64,
    ) -> Result<Option<ClassificationRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM freight_classifications WHERE classification_id = ?1"
                ),
                [classification_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_classification(&row, 0)?)),
            None => Ok(None),
        }
    }

    /// Overwrite every field of the classification with `record.classification_id`.
    ///
    /// Returns `false` when no row has that id; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the update fails, including when the new
    /// values collide with another row's natural key.
    pub async fn update_classification(
        &self,
        record: &ClassificationRecord,
    ) -> Result<bool, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE freight_classifications
                 SET description = ?1, nmfc = ?2, freight_class = ?3, hazardous = ?4,
                     hazard_id = ?5, packing_group = ?6, sub = ?7
                 WHERE classification_id = ?8",
                libsql::params![
                    record.description.as_deref(),
                    record.nmfc.as_deref(),
                    record.freight_class.as_str(),
                    record.hazardous.map(i64::from),
                    record.hazard_id.as_deref(),
                    record.packing_group.as_deref(),
                    record.sub.as_deref(),
                    record.classification_id
                ],
            )
            .await?;

        if changed == 0 {
            tracing::debug!(
                classification_id = record.classification_id,
                "update skipped: no such classification"
            );
        } else {
            tracing::debug!(
                classification_id = record.classification_id,
                "classification updated"
            );
        }
        Ok(changed > 0)
    }

    /// Insert a classification unless one with the same natural key
    /// (description, NMFC, sub) already exists.
    ///
    /// A duplicate is a silent no-op: the existing row's other fields are not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails for any reason other than
    /// the natural-key conflict.
    pub async fn insert_classification(
        &self,
        new: &NewClassification,
    ) -> Result<InsertOutcome, DatabaseError> {
        let conn = self.db().conn();
        let changed = conn
            .execute(
                "INSERT INTO freight_classifications
                    (description, nmfc, freight_class, hazardous, hazard_id, packing_group, sub)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT DO NOTHING",
                libsql::params![
                    new.description.as_deref(),
                    new.nmfc.as_deref(),
                    new.freight_class.as_str(),
                    new.hazardous.map(i64::from),
                    new.hazard_id.as_deref(),
                    new.packing_group.as_deref(),
                    new.sub.as_deref()
                ],
            )
            .await?;

        if changed == 0 {
            tracing::debug!(
                description = ?new.description,
                nmfc = ?new.nmfc,
                "classification already exists, insert skipped"
            );
            return Ok(InsertOutcome::Duplicate);
        }

        let id = conn.last_insert_rowid();
        tracing::debug!(classification_id = id, "classification inserted");
        Ok(InsertOutcome::Inserted(id))
    }

    /// Delete every classification whose id is in `ids`. Unknown ids are
    /// ignored. Returns how many rows were removed.
    ///
    /// Links pointing at a deleted classification fall back to unlinked.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn delete_classifications(&self, ids: &[i64]) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let params: Vec<libsql::Value> = ids.iter().copied().map(libsql::Value::Integer).collect();
        let deleted = self
            .db()
            .conn()
            .execute(
                &format!(
                    "DELETE FROM freight_classifications WHERE classification_id IN ({})",
                    placeholders(ids.len())
                ),
                libsql::params_from_iter(params),
            )
            .await?;

        tracing::debug!(requested = ids.len(), deleted, "classifications deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{classification, seed_classification, test_service};

    #[tokio::test]
    async fn insert_and_list_roundtrip() {
        let svc = test_service().await;
        let new = NewClassification {
            description: Some("Sulfuric acid".into()),
            nmfc: Some("44155".into()),
            freight_class: "85".into(),
            hazardous: Some(true),
            hazard_id: Some("UN1830".into()),
            packing_group: Some("II".into()),
            sub: Some("2".into()),
        };

        let InsertOutcome::Inserted(id) = svc.insert_classification(&new).await.unwrap() else {
            panic!("expected insert");
        };

        let all = svc.list_classifications().await.unwrap();
        assert_eq!(all, vec![new.with_id(id)]);
    }

    #[tokio::test]
    async fn duplicate_natural_key_is_ignored() {
        let svc = test_service().await;
        let first = classification("Acetone", "60");
        svc.insert_classification(&first).await.unwrap();

        let second = NewClassification {
            freight_class: "100".into(),
            ..first.clone()
        };
        let outcome = svc.insert_classification(&second).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Duplicate);

        let all = svc.list_classifications().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].freight_class, "60", "existing row must not be overwritten");
    }

    #[tokio::test]
    async fn null_and_empty_share_a_natural_key() {
        let svc = test_service().await;
        svc.insert_classification(&NewClassification {
            nmfc: None,
            ..classification("Bleach", "55")
        })
        .await
        .unwrap();
        let outcome = svc
            .insert_classification(&NewClassification {
                nmfc: Some(String::new()),
                ..classification("Bleach", "55")
            })
            .await
            .unwrap();
        assert_eq!(outcome, InsertOutcome::Duplicate);
    }

    #[tokio::test]
    async fn different_sub_is_a_different_key() {
        let svc = test_service().await;
        svc.insert_classification(&NewClassification {
            sub: Some("1".into()),
            ..classification("Resin", "65")
        })
        .await
        .unwrap();
        let outcome = svc
            .insert_classification(&NewClassification {
                sub: Some("2".into()),
                ..classification("Resin", "65")
            })
            .await
            .unwrap();
        assert!(matches!(outcome, InsertOutcome::Inserted(_)));
        assert_eq!(svc.list_classifications().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let svc = test_service().await;
        let id = seed_classification(&svc, "Methanol").await;

        let updated = ClassificationRecord {
            classification_id: id,
            description: Some("Methanol, anhydrous".into()),
            nmfc: Some("48580".into()),
            freight_class: "77.5".into(),
            hazardous: Some(true),
            hazard_id: Some("UN1230".into()),
            packing_group: Some("II".into()),
            sub: None,
        };
        assert!(svc.update_classification(&updated).await.unwrap());
        assert_eq!(svc.get_classification(id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_can_clear_hazardous_back_to_unknown() {
        let svc = test_service().await;
        let id = seed_classification(&svc, "Glycol").await;
        let mut record = svc.get_classification(id).await.unwrap().unwrap();

        record.hazardous = Some(false);
        svc.update_classification(&record).await.unwrap();
        assert_eq!(
            svc.get_classification(id).await.unwrap().unwrap().hazardous,
            Some(false)
        );

        record.hazardous = None;
        svc.update_classification(&record).await.unwrap();
        assert_eq!(svc.get_classification(id).await.unwrap().unwrap().hazardous, None);
    }

    #[tokio::test]
    async fn update_missing_id_is_noop() {
        let svc = test_service().await;
        let id = seed_classification(&svc, "Toluene").await;
        let before = svc.list_classifications().await.unwrap();

        let ghost = classification("Ghost", "50").with_id(id + 100);
        assert!(!svc.update_classification(&ghost).await.unwrap());
        assert_eq!(svc.list_classifications().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_ignores_unknown_ids() {
        let svc = test_service().await;
        let keep = seed_classification(&svc, "Keep").await;
        let drop = seed_classification(&svc, "Drop").await;

        let deleted = svc
            .delete_classifications(&[drop, drop + 50, drop + 51])
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        let remaining: Vec<i64> = svc
            .list_classifications()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.classification_id)
            .collect();
        assert_eq!(remaining, vec![keep]);
    }

    #[tokio::test]
    async fn delete_empty_set_is_noop() {
        let svc = test_service().await;
        seed_classification(&svc, "Keep").await;
        assert_eq!(svc.delete_classifications(&[]).await.unwrap(), 0);
        assert_eq!(svc.list_classifications().await.unwrap().len(), 1);
    }
}
