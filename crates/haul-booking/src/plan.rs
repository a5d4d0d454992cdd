//! Turning one order into a carrier-ready booking plan.

use std::fmt;

use chrono::NaiveDate;
use haul_config::OriginConfig;
use haul_core::enums::PackingGroup;
use haul_core::freight_class::FreightClass;
use haul_db::service::FreightService;
use serde::Serialize;

use crate::error::BookingError;
use crate::order::{BookingRequest, Order, OrderItem};

const LIFTGATE_DELIVERY: &str = "liftgate delivery";
const DESTINATION_COUNTRY: &str = "USA";

/// Carrier destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DestinationType {
    #[serde(rename = "business dock")]
    BusinessDock,
    #[serde(rename = "business no dock")]
    BusinessNoDock,
    #[serde(rename = "residential")]
    Residential,
    #[serde(rename = "limited access")]
    LimitedAccess,
}

impl DestinationType {
    /// Pick the destination type from the delivery flags. Liftgate to a
    /// business wins over residential, which wins over limited access.
    #[must_use]
    pub const fn for_delivery(liftgate: bool, residential: bool, limited_access: bool) -> Self {
        if liftgate && !residential {
            Self::BusinessNoDock
        } else if residential {
            Self::Residential
        } else if limited_access {
            Self::LimitedAccess
        } else {
            Self::BusinessDock
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessDock => "business dock",
            Self::BusinessNoDock => "business no dock",
            Self::Residential => "residential",
            Self::LimitedAccess => "limited access",
        }
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hazardous-materials data for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hazard {
    pub hazmat_id: String,
    pub packing_group: Option<PackingGroup>,
}

/// One order line enriched with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedItem {
    pub sku: String,
    pub quantity: u32,
    pub description: Option<String>,
    pub freight_class: FreightClass,
    pub nmfc: Option<String>,
    pub hazardous: Option<bool>,
    pub hazard: Option<Hazard>,
    pub packaging_type: Option<String>,
    pub said_to_contain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub company: Option<String>,
    pub address: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub dest_type: DestinationType,
    pub contact_name: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub reference_number: String,
}

/// Everything a rate request needs, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingPlan {
    pub quote_reference: String,
    pub pickup_date: NaiveDate,
    pub origin: OriginConfig,
    pub destination: Destination,
    pub accessorials: Vec<String>,
    pub items: Vec<PlannedItem>,
}

/// Build a booking plan for the single order in `request`.
///
/// # Errors
///
/// - `BookingError::NoOrders` / `MultipleOrders` unless exactly one order is given
/// - `BookingError::OriginNotConfigured` when the pickup address is incomplete
/// - `BookingError::EmptyOrder` for an order without items
/// - `BookingError::Unclassified` / `InvalidFreightClass` for items the
///   classification data cannot cover
/// - `BookingError::Database` if a lookup fails
pub async fn plan_booking(
    service: &FreightService,
    request: &BookingRequest,
    origin: &OriginConfig,
    today: NaiveDate,
) -> Result<BookingPlan, BookingError> {
    let order = match request.orders.as_slice() {
        [] => return Err(BookingError::NoOrders),
        [order] => order,
        many => return Err(BookingError::MultipleOrders(many.len())),
    };
    if !origin.is_configured() {
        return Err(BookingError::OriginNotConfigured);
    }
    if order.items.is_empty() {
        return Err(BookingError::EmptyOrder {
            order_number: order.order_number.clone(),
        });
    }

    let mut items = Vec::with_capacity(order.items.len());
    for item in &order.items {
        items.push(plan_item(service, item).await?);
    }

    let residential = order.ship_to.residential.unwrap_or(false);
    let dest_type =
        DestinationType::for_delivery(request.liftgate, residential, request.limited_access);
    let accessorials = if request.liftgate {
        vec![LIFTGATE_DELIVERY.to_string()]
    } else {
        Vec::new()
    };

    tracing::info!(
        order = %order.order_number,
        items = items.len(),
        %dest_type,
        "booking plan built"
    );

    Ok(BookingPlan {
        quote_reference: format!("{} {}", order.order_number, today.format("%Y-%m-%d")),
        pickup_date: today,
        origin: origin.clone(),
        destination: destination(order, dest_type),
        accessorials,
        items,
    })
}

async fn plan_item(service: &FreightService, item: &OrderItem) -> Result<PlannedItem, BookingError> {
    let data = service
        .freight_data_for_sku(&item.sku)
        .await?
        .ok_or_else(|| BookingError::Unclassified {
            sku: item.sku.clone(),
        })?;
    let classification = data.classification;

    let freight_class: FreightClass =
        classification
            .freight_class
            .parse()
            .map_err(|_| BookingError::InvalidFreightClass {
                sku: item.sku.clone(),
                value: classification.freight_class.clone(),
            })?;

    let hazard = classification
        .hazard_id
        .filter(|id| !id.trim().is_empty())
        .map(|hazmat_id| Hazard {
            hazmat_id,
            packing_group: classification
                .packing_group
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .and_then(|raw| lenient_packing_group(&item.sku, raw)),
        });

    Ok(PlannedItem {
        sku: item.sku.clone(),
        quantity: item.quantity,
        description: classification.description,
        freight_class,
        nmfc: classification.nmfc,
        hazardous: classification.hazardous,
        hazard,
        packaging_type: data.product.packaging_type,
        said_to_contain: data.product.unit_container_type,
    })
}

fn lenient_packing_group(sku: &str, raw: &str) -> Option<PackingGroup> {
    match raw.parse() {
        Ok(group) => Some(group),
        Err(error) => {
            tracing::warn!(sku, %error, "ignoring packing group");
            None
        }
    }
}

fn destination(order: &Order, dest_type: DestinationType) -> Destination {
    let ship_to = &order.ship_to;
    Destination {
        company: ship_to.company.clone(),
        address: ship_to.street1.clone(),
        address2: ship_to.street2.clone(),
        city: ship_to.city.clone(),
        state: ship_to.state.clone(),
        postal_code: ship_to.postal_code.clone(),
        country: DESTINATION_COUNTRY.to_string(),
        dest_type,
        contact_name: ship_to.name.clone(),
        contact_phone: ship_to.phone.clone(),
        contact_email: order.customer_email.clone(),
        reference_number: order.order_number.clone(),
    }
}
