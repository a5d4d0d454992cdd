use haul_core::errors::StoreError;
use thiserror::Error;

/// Errors surfaced by [`crate::LinkingSession`] operations other than submit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// The product is not in the currently listed unlinked rows.
    #[error("product {product_id} is not in the unlinked list")]
    NotListed { product_id: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}
