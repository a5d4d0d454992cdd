use serde::{Deserialize, Serialize};

use super::{ClassificationRecord, ProductRecord};

/// Join row tagging a product with a classification.
///
/// `classification_id: None` means the product is unlinked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkRecord {
    pub link_id: i64,
    pub product_id: i64,
    pub classification_id: Option<i64>,
}

/// A product whose link row has no classification yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UnlinkedProduct {
    pub link_id: i64,
    pub product_id: i64,
    pub sku: String,
    pub name: String,
}

/// One entry of a bulk link mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LinkUpdate {
    pub link_id: i64,
    pub classification_id: i64,
}

/// Everything known about a linked SKU: the product, its link row, and the
/// classification the link points at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreightData {
    pub product: ProductRecord,
    pub link: LinkRecord,
    pub classification: ClassificationRecord,
}
