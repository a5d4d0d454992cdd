use serde::{Deserialize, Serialize};

/// A freight-tariff classification row.
///
/// `classification_id` never changes once assigned; every other field is
/// nullable and edited independently. `hazardous: None` means unknown, not
/// `false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub classification_id: i64,
    pub description: Option<String>,
    pub nmfc: Option<String>,
    /// Freight class exactly as entered. See [`crate::freight_class::FreightClass`]
    /// for the numeric interpretation.
    pub freight_class: String,
    pub hazardous: Option<bool>,
    pub hazard_id: Option<String>,
    pub packing_group: Option<String>,
    pub sub: Option<String>,
}

/// A classification that has not been stored yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewClassification {
    pub description: Option<String>,
    pub nmfc: Option<String>,
    pub freight_class: String,
    pub hazardous: Option<bool>,
    pub hazard_id: Option<String>,
    pub packing_group: Option<String>,
    pub sub: Option<String>,
}

impl NewClassification {
    /// Attach an id, producing the stored form.
    #[must_use]
    pub fn with_id(self, classification_id: i64) -> ClassificationRecord {
        ClassificationRecord {
            classification_id,
            description: self.description,
            nmfc: self.nmfc,
            freight_class: self.freight_class,
            hazardous: self.hazardous,
            hazard_id: self.hazard_id,
            packing_group: self.packing_group,
            sub: self.sub,
        }
    }
}
