//! Hub entity: the bridge's read-only view of one entity in the hub's state store.
//!
//! An entity is identified by a `domain.object_id` pair, carries a free-form
//! state string (`"on"`, `"locked"`, `"21.5"`, …) and a bag of typed attributes.
//! The bridge never mutates entities; it only reads snapshots and emits
//! [`ServiceCall`](crate::service::ServiceCall)s.

mod attribute_value;
mod attributes;
mod domain;
mod entity_id;
pub mod state;

pub use attribute_value::AttributeValue;
pub use attributes::{ATTR_SUPPORTED_FEATURES, AttributeError, Attributes};
pub use domain::Domain;
pub use entity_id::{EntityId, HUB_SEPARATOR};

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::time::{Timestamp, now};

/// Attribute key holding the human-readable name of an entity.
pub const ATTR_FRIENDLY_NAME: &str = "friendly_name";

/// A snapshot of one hub entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubEntity {
    pub entity_id: EntityId,
    pub state: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default = "now")]
    pub last_updated: Timestamp,
}

impl HubEntity {
    /// Create a builder for constructing a [`HubEntity`].
    #[must_use]
    pub fn builder() -> HubEntityBuilder {
        HubEntityBuilder::default()
    }

    /// The domain tag of this entity.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.entity_id.domain()
    }

    /// Human-readable name: the `friendly_name` attribute, falling back to
    /// the object id with underscores turned into spaces.
    #[must_use]
    pub fn name(&self) -> String {
        self.attributes
            .str(ATTR_FRIENDLY_NAME)
            .map_or_else(|| self.entity_id.object_id().replace('_', " "), str::to_string)
    }
}

/// Step-by-step builder for [`HubEntity`].
#[derive(Debug, Default)]
pub struct HubEntityBuilder {
    entity_id: Option<String>,
    state: Option<String>,
    attributes: Attributes,
    last_updated: Option<Timestamp>,
}

impl HubEntityBuilder {
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    #[must_use]
    pub fn last_updated(mut self, ts: Timestamp) -> Self {
        self.last_updated = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`HubEntity`].
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Validation`] if the entity id is missing or malformed.
    pub fn build(self) -> Result<HubEntity, BridgeError> {
        let entity_id: EntityId = self.entity_id.unwrap_or_default().parse()?;
        Ok(HubEntity {
            entity_id,
            state: self.state.unwrap_or_else(|| state::STATE_UNKNOWN.to_string()),
            attributes: self.attributes,
            last_updated: self.last_updated.unwrap_or_else(now),
        })
    }
}
