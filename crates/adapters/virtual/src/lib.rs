//! # voxbridge-adapter-virtual
//!
//! Virtual hub that keeps entity snapshots in memory and applies service
//! calls to them. It backs the bridge when no real hub is attached and is
//! what the integration tests drive.
//!
//! ## Provided entities
//!
//! With no configured entities the hub is seeded with one entity per
//! supported domain (see [`demo::entities`]): `switch.virtual_switch`,
//! `light.virtual_light`, `cover.garage_door`, `fan.ceiling_fan`,
//! `climate.hallway`, `lock.front_door`, `media_player.living_room`,
//! `scene.movie_night`, `script.good_night`, `sensor.virtual_temperature`
//! and `group.downstairs`.
//!
//! ## Dependency rule
//!
//! Depends on `voxbridge-app` (port traits) and `voxbridge-domain` only.

mod config;
pub mod demo;
mod transition;

pub use config::VirtualEntityConfig;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{PoisonError, RwLock};

use voxbridge_app::ports::{ServiceDispatcher, StateStore};
use voxbridge_domain::entity::{EntityId, HubEntity};
use voxbridge_domain::error::{BridgeError, NotFoundError};
use voxbridge_domain::event::RequestContext;
use voxbridge_domain::service::ServiceCall;

/// In-memory hub: entity table plus a service dispatcher mutating it.
pub struct VirtualHub {
    entities: RwLock<HashMap<EntityId, HubEntity>>,
}

impl Default for VirtualHub {
    fn default() -> Self {
        Self::new(demo::entities())
    }
}

impl VirtualHub {
    #[must_use]
    pub fn new(entities: Vec<HubEntity>) -> Self {
        let entities = entities
            .into_iter()
            .map(|entity| (entity.entity_id.clone(), entity))
            .collect();
        Self {
            entities: RwLock::new(entities),
        }
    }

    /// Build the hub from configured entities, falling back to the demo set
    /// when none are configured.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a configured entity id is malformed.
    pub fn from_config(configs: &[VirtualEntityConfig]) -> Result<Self, BridgeError> {
        if configs.is_empty() {
            return Ok(Self::default());
        }
        let entities = configs
            .iter()
            .map(VirtualEntityConfig::to_entity)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entities))
    }

    /// Insert or replace an entity snapshot.
    pub fn upsert(&self, entity: HubEntity) {
        self.entities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(entity.entity_id.clone(), entity);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self, entity_id: &EntityId) -> Option<HubEntity> {
        self.entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(entity_id)
            .cloned()
    }

    fn snapshots(&self) -> Vec<HubEntity> {
        let mut entities: Vec<HubEntity> = self
            .entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        entities.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
        entities
    }

    fn apply(&self, call: &ServiceCall) -> Result<(), BridgeError> {
        let mut entities = self.entities.write().unwrap_or_else(PoisonError::into_inner);
        let entity = entities.get_mut(&call.entity_id).ok_or_else(|| NotFoundError {
            entity: "Entity",
            id: call.entity_id.to_string(),
        })?;
        transition::apply(entity, call)
    }
}

impl StateStore for VirtualHub {
    fn get(&self, entity_id: &EntityId) -> impl Future<Output = Result<Option<HubEntity>, BridgeError>> + Send {
        let result = self.snapshot(entity_id);
        async { Ok(result) }
    }

    fn all(&self) -> impl Future<Output = Result<Vec<HubEntity>, BridgeError>> + Send {
        let result = self.snapshots();
        async { Ok(result) }
    }
}

impl ServiceDispatcher for VirtualHub {
    fn call(
        &self,
        call: ServiceCall,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send {
        tracing::info!(
            service = %call.qualified_name(),
            entity_id = %call.entity_id,
            context_id = %context.id,
            "virtual service call"
        );
        let result = self.apply(&call);
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use voxbridge_domain::service::{SERVICE_TURN_OFF, SERVICE_TURN_ON};

    fn entity_id(value: &str) -> EntityId {
        value.parse().unwrap()
    }

    #[tokio::test]
    async fn should_seed_demo_entities_by_default() {
        let hub = VirtualHub::default();
        let all = hub.all().await.unwrap();
        assert_eq!(all.len(), demo::entities().len());
        assert!(all.windows(2).all(|pair| pair[0].entity_id < pair[1].entity_id));
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_entity() {
        let hub = VirtualHub::default();
        let result = hub.get(&entity_id("switch.missing")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_turn_on_switch_when_service_called() {
        let hub = VirtualHub::default();
        let id = entity_id("switch.virtual_switch");
        hub.call(ServiceCall::new(&id, SERVICE_TURN_ON), &RequestContext::new())
            .await
            .unwrap();
        assert_eq!(hub.get(&id).await.unwrap().unwrap().state, "on");

        hub.call(ServiceCall::new(&id, SERVICE_TURN_OFF), &RequestContext::new())
            .await
            .unwrap();
        assert_eq!(hub.get(&id).await.unwrap().unwrap().state, "off");
    }

    #[tokio::test]
    async fn should_return_not_found_for_call_on_unknown_entity() {
        let hub = VirtualHub::default();
        let call = ServiceCall::new(&entity_id("switch.missing"), SERVICE_TURN_ON);
        let result = hub.call(call, &RequestContext::new()).await;
        assert!(matches!(result, Err(BridgeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_replace_entity_on_upsert() {
        let hub = VirtualHub::new(Vec::new());
        assert!(hub.is_empty());
        let entity = HubEntity::builder()
            .entity_id("switch.kettle")
            .state("off")
            .build()
            .unwrap();
        hub.upsert(entity.clone());
        hub.upsert(HubEntity { state: "on".to_string(), ..entity });
        assert_eq!(hub.len(), 1);
        assert_eq!(hub.get(&entity_id("switch.kettle")).await.unwrap().unwrap().state, "on");
    }

    #[tokio::test]
    async fn should_build_from_configured_entities() {
        let configs = vec![VirtualEntityConfig {
            entity_id: "light.desk".to_string(),
            state: "on".to_string(),
            attributes: json!({"brightness": 128}).as_object().cloned().unwrap(),
        }];
        let hub = VirtualHub::from_config(&configs).unwrap();
        let all = hub.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].attributes.i64("brightness"), Some(128));
    }

    #[test]
    fn should_fall_back_to_demo_set_without_configuration() {
        let hub = VirtualHub::from_config(&[]).unwrap();
        assert_eq!(hub.len(), demo::entities().len());
    }

    #[test]
    fn should_reject_malformed_configured_entity() {
        let configs = vec![VirtualEntityConfig {
            entity_id: "not-an-entity".to_string(),
            state: "on".to_string(),
            attributes: serde_json::Map::new(),
        }];
        assert!(matches!(
            VirtualHub::from_config(&configs),
            Err(BridgeError::Validation(_))
        ));
    }
}
