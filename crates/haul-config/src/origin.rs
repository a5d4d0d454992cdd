//! Shipping origin (pickup location) used when planning bookings.

use serde::{Deserialize, Serialize};

fn default_country() -> String {
    "USA".to_string()
}

fn default_dock_open() -> String {
    "09:00 AM".to_string()
}

fn default_dock_close() -> String {
    "04:00 PM".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OriginConfig {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default = "default_dock_open")]
    pub dock_hours_open: String,
    #[serde(default = "default_dock_close")]
    pub dock_hours_close: String,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            company: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: default_country(),
            contact_name: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            dock_hours_open: default_dock_open(),
            dock_hours_close: default_dock_close(),
        }
    }
}

impl OriginConfig {
    /// Check that the fields a carrier needs to schedule a pickup are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.company.is_empty()
            && !self.address.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.postal_code.is_empty()
    }
}
