//! State store port: read access to the hub's entities.

use std::future::Future;

use voxbridge_domain::entity::{EntityId, HubEntity};
use voxbridge_domain::error::BridgeError;

/// Read-only view of the hub's current entity states.
pub trait StateStore {
    /// Look up one entity, `None` when the hub does not know it.
    fn get(
        &self,
        entity_id: &EntityId,
    ) -> impl Future<Output = Result<Option<HubEntity>, BridgeError>> + Send;

    /// Snapshot of every entity.
    fn all(&self) -> impl Future<Output = Result<Vec<HubEntity>, BridgeError>> + Send;
}

impl<T: StateStore + Send + Sync> StateStore for std::sync::Arc<T> {
    fn get(
        &self,
        entity_id: &EntityId,
    ) -> impl Future<Output = Result<Option<HubEntity>, BridgeError>> + Send {
        (**self).get(entity_id)
    }

    fn all(&self) -> impl Future<Output = Result<Vec<HubEntity>, BridgeError>> + Send {
        (**self).all()
    }
}
