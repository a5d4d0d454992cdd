//! Entity structs for the freight reference tables.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize` and `Deserialize` so they can be printed by the CLI and read
//! back from JSON input.

mod classification;
mod link;
mod product;

pub use classification::{ClassificationRecord, NewClassification};
pub use link::{FreightData, LinkRecord, LinkUpdate, UnlinkedProduct};
pub use product::ProductRecord;
