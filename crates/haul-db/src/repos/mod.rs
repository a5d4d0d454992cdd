//! Store operations for the freight tables.
//!
//! Each module adds methods to `FreightService` via `impl FreightService` blocks.

pub mod classification;
pub mod link;
pub mod product;
