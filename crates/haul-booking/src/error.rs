use haul_db::error::DatabaseError;
use thiserror::Error;

/// Why a booking plan could not be built.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("no orders available")]
    NoOrders,

    #[error("only one order can be processed at a time, got {0}")]
    MultipleOrders(usize),

    #[error("order {order_number} has no items")]
    EmptyOrder { order_number: String },

    /// The SKU has no product, no link row, or an unlinked link row.
    #[error("SKU '{sku}' is not linked to a freight classification")]
    Unclassified { sku: String },

    #[error("SKU '{sku}' has freight class '{value}', which is not an NMFC class")]
    InvalidFreightClass { sku: String, value: String },

    #[error("shipping origin is not configured (set [origin] in .haul/config.toml)")]
    OriginNotConfigured,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
