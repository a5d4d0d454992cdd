use serde::{Deserialize, Serialize};

/// An e-commerce product. `sku` is the business key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRecord {
    pub product_id: i64,
    pub sku: String,
    pub name: String,
    pub packaging_type: Option<String>,
    pub unit_container_type: Option<String>,
}
