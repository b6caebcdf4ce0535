//! Service calls: the generic invocation the bridge hands to the hub.
//!
//! Every state change a directive requests becomes exactly one
//! [`ServiceCall`]: `light.turn_on {brightness_pct: 40}`,
//! `climate.set_temperature {temperature: 21.0}`, and so on.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::EntityId;

/// Domain whose `turn_on`/`turn_off` services act on any entity.
pub const GENERIC_DOMAIN: &str = "hub";

pub const SERVICE_TURN_ON: &str = "turn_on";
pub const SERVICE_TURN_OFF: &str = "turn_off";
pub const SERVICE_OPEN_COVER: &str = "open_cover";
pub const SERVICE_CLOSE_COVER: &str = "close_cover";
pub const SERVICE_SET_COVER_POSITION: &str = "set_cover_position";
pub const SERVICE_SET_SPEED: &str = "set_speed";
pub const SERVICE_SET_TEMPERATURE: &str = "set_temperature";
pub const SERVICE_SET_OPERATION_MODE: &str = "set_operation_mode";
pub const SERVICE_LOCK: &str = "lock";
pub const SERVICE_UNLOCK: &str = "unlock";
pub const SERVICE_VOLUME_SET: &str = "volume_set";
pub const SERVICE_VOLUME_MUTE: &str = "volume_mute";
pub const SERVICE_VOLUME_UP: &str = "volume_up";
pub const SERVICE_VOLUME_DOWN: &str = "volume_down";
pub const SERVICE_MEDIA_PLAY: &str = "media_play";
pub const SERVICE_MEDIA_PAUSE: &str = "media_pause";
pub const SERVICE_MEDIA_STOP: &str = "media_stop";
pub const SERVICE_MEDIA_NEXT_TRACK: &str = "media_next_track";
pub const SERVICE_MEDIA_PREVIOUS_TRACK: &str = "media_previous_track";
pub const SERVICE_SELECT_SOURCE: &str = "select_source";

/// One service invocation targeting one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub entity_id: EntityId,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl ServiceCall {
    /// A call in the target entity's own domain.
    #[must_use]
    pub fn new(entity_id: &EntityId, service: impl Into<String>) -> Self {
        Self::in_domain(entity_id.domain_str(), service, entity_id)
    }

    /// A call in an explicit domain.
    #[must_use]
    pub fn in_domain(domain: impl Into<String>, service: impl Into<String>, entity_id: &EntityId) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            entity_id: entity_id.clone(),
            data: Map::new(),
        }
    }

    /// Attach one data field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// `domain.service`, e.g. `light.turn_on`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.domain, self.service)
    }
}

impl fmt::Display for ServiceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} -> {}", self.domain, self.service, self.entity_id)
    }
}
