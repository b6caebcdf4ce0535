//! Bridge configuration shared by every request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use voxbridge_domain::entity::EntityId;
use voxbridge_domain::filter::ExposurePolicy;
use voxbridge_domain::protocol::DisplayCategory;
use voxbridge_domain::temperature::TemperatureUnit;

/// Per-entity overrides applied after the endpoint is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_categories: Option<DisplayCategory>,
}

/// Immutable configuration of the smart-home bridge.
#[derive(Debug, Clone, Default)]
pub struct SmartHomeConfig {
    pub policy: ExposurePolicy,
    /// Overrides keyed by entity id (`light.kitchen`).
    pub entity_config: HashMap<String, EntityOverrides>,
    /// Unit the hub stores temperatures in.
    pub temperature_unit: TemperatureUnit,
}

impl SmartHomeConfig {
    #[must_use]
    pub fn overrides(&self, entity_id: &EntityId) -> Option<&EntityOverrides> {
        self.entity_config.get(entity_id.as_str())
    }
}
