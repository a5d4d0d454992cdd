//! # haul-core
//!
//! Core types and error types shared by every Haul crate.
//!
//! - Entity structs for the freight reference tables (classifications,
//!   products, product links)
//! - Packing group enum and the typed NMFC freight class
//! - Cross-cutting error types, including the backend-agnostic store errors
//!   the linking workflow is written against

pub mod entities;
pub mod enums;
pub mod errors;
pub mod freight_class;
