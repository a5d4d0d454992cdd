//! The persistence seam the linking workflow depends on.

use async_trait::async_trait;
use haul_core::entities::{LinkUpdate, UnlinkedProduct};
use haul_core::errors::{LinkUpdateError, StoreError};
use haul_db::service::FreightService;

/// Link store operations consumed by [`crate::LinkingSession`].
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Products whose link row has no classification.
    async fn list_unlinked_products(&self) -> Result<Vec<UnlinkedProduct>, StoreError>;

    /// Apply every update or none of them.
    async fn bulk_update_links(&self, updates: &[LinkUpdate]) -> Result<(), LinkUpdateError>;
}

#[async_trait]
impl LinkStore for FreightService {
    async fn list_unlinked_products(&self) -> Result<Vec<UnlinkedProduct>, StoreError> {
        Ok(Self::list_unlinked_products(self).await?)
    }

    async fn bulk_update_links(&self, updates: &[LinkUpdate]) -> Result<(), LinkUpdateError> {
        Self::bulk_update_links(self, updates).await
    }
}
