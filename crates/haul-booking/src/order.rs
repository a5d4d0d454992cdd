//! Order shapes as exported by the order-management system.
//!
//! Field names follow its camelCase JSON.

use serde::{Deserialize, Serialize};

/// A booking request: the orders to ship plus the delivery flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub orders: Vec<Order>,
    #[serde(default)]
    pub liftgate: bool,
    #[serde(default)]
    pub limited_access: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub ship_to: ShipTo,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipTo {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub street1: String,
    #[serde(default)]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// `None` when the address validator could not tell.
    #[serde(default)]
    pub residential: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "one")]
    pub quantity: u32,
}

const fn one() -> u32 {
    1
}
