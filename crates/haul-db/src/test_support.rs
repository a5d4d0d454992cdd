//! Shared test utilities for haul-db unit tests.

pub(crate) mod helpers {
    use haul_core::entities::{LinkRecord, NewClassification, ProductRecord};

    use crate::repos::classification::InsertOutcome;
    use crate::service::FreightService;

    /// Create an in-memory FreightService.
    pub async fn test_service() -> FreightService {
        FreightService::new_local(":memory:").await.unwrap()
    }

    /// A classification with only a description and freight class set.
    pub fn classification(description: &str, freight_class: &str) -> NewClassification {
        NewClassification {
            description: Some(description.to_string()),
            freight_class: freight_class.to_string(),
            ..Default::default()
        }
    }

    /// Insert a classification and return its id.
    pub async fn seed_classification(svc: &FreightService, description: &str) -> i64 {
        match svc
            .insert_classification(&classification(description, "85"))
            .await
            .unwrap()
        {
            InsertOutcome::Inserted(id) => id,
            InsertOutcome::Duplicate => panic!("seed classification '{description}' already exists"),
        }
    }

    /// Create a product with an unlinked link row.
    pub async fn seed_unlinked(
        svc: &FreightService,
        sku: &str,
        name: &str,
    ) -> (ProductRecord, LinkRecord) {
        let product = svc.ensure_product(sku, name).await.unwrap().into_product();
        let link = svc.ensure_link(product.product_id).await.unwrap();
        (product, link)
    }
}
