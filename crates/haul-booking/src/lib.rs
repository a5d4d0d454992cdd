//! # haul-booking
//!
//! Builds the payload a carrier rate request needs from a single order: each
//! item's freight class, NMFC, and hazard data from the link store, the
//! destination type from the delivery flags, and the pickup origin from
//! configuration.
//!
//! Sending the request is not implemented. [`plan_booking`] stops at the
//! finished [`BookingPlan`].

pub mod error;
pub mod order;
pub mod plan;

pub use error::BookingError;
pub use order::{BookingRequest, Order, OrderItem, ShipTo};
pub use plan::{BookingPlan, Destination, DestinationType, Hazard, PlannedItem, plan_booking};
