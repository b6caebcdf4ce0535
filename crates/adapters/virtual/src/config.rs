//! Entities declared in the configuration file (`[[entities]]`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use voxbridge_domain::entity::HubEntity;
use voxbridge_domain::error::BridgeError;

/// One configured entity snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualEntityConfig {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl VirtualEntityConfig {
    /// Turn the declaration into a [`HubEntity`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if `entity_id` is not `domain.object_id`.
    pub fn to_entity(&self) -> Result<HubEntity, BridgeError> {
        self.attributes
            .iter()
            .fold(
                HubEntity::builder()
                    .entity_id(self.entity_id.as_str())
                    .state(self.state.as_str()),
                |builder, (key, value)| builder.attribute(key.as_str(), value.clone()),
            )
            .build()
    }
}
