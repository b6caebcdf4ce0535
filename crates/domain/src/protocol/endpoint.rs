//! Endpoint descriptors returned by discovery.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::{DisplayCategory, Interface, PAYLOAD_VERSION};
use crate::entity::{EntityId, HUB_SEPARATOR};
use crate::error::ValidationError;

/// Separator the protocol uses where the hub uses `.`.
pub const ENDPOINT_SEPARATOR: char = '#';

/// A protocol endpoint id: the entity id with `.` replaced by `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(String);

impl EndpointId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map back to the hub entity id.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the id does not name a valid entity.
    pub fn to_entity_id(&self) -> Result<EntityId, ValidationError> {
        self.0.replace(ENDPOINT_SEPARATOR, &HUB_SEPARATOR.to_string()).parse()
    }
}

impl From<&EntityId> for EndpointId {
    fn from(entity_id: &EntityId) -> Self {
        Self(
            entity_id
                .as_str()
                .replace(HUB_SEPARATOR, &ENDPOINT_SEPARATOR.to_string()),
        )
    }
}

impl From<&str> for EndpointId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One capability interface declared by an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub interface: Interface,
    /// Properties this endpoint actually supports; a subset of the
    /// interface's full list.
    pub supported: Vec<&'static str>,
    /// Only set for scene-like interfaces.
    pub supports_deactivation: Option<bool>,
}

impl Capability {
    /// Declare every property of the interface.
    #[must_use]
    pub fn new(interface: Interface) -> Self {
        Self {
            interface,
            supported: interface.spec().properties.to_vec(),
            supports_deactivation: None,
        }
    }

    /// Declare only the named properties.
    #[must_use]
    pub fn with_supported(mut self, supported: Vec<&'static str>) -> Self {
        self.supported = supported;
        self
    }

    #[must_use]
    pub fn with_deactivation(mut self, supported: bool) -> Self {
        self.supports_deactivation = Some(supported);
        self
    }
}

#[derive(Serialize)]
struct SupportedProperty {
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CapabilityProperties {
    supported: Vec<SupportedProperty>,
    proactively_reported: bool,
    retrievable: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CapabilityWire {
    #[serde(rename = "type")]
    kind: &'static str,
    interface: &'static str,
    version: &'static str,
    properties: CapabilityProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    supports_deactivation: Option<bool>,
}

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let spec = self.interface.spec();
        CapabilityWire {
            kind: "AlexaInterface",
            interface: spec.namespace,
            version: PAYLOAD_VERSION,
            properties: CapabilityProperties {
                supported: self
                    .supported
                    .iter()
                    .map(|&name| SupportedProperty { name })
                    .collect(),
                proactively_reported: spec.proactively_reported,
                retrievable: spec.retrievable,
            },
            supports_deactivation: self.supports_deactivation,
        }
        .serialize(serializer)
    }
}

/// A discoverable endpoint built from one hub entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub endpoint_id: EndpointId,
    pub friendly_name: String,
    pub description: String,
    pub manufacturer_name: String,
    pub display_categories: Vec<DisplayCategory>,
    pub capabilities: Vec<Capability>,
}

impl Endpoint {
    #[must_use]
    pub fn interfaces(&self) -> Vec<Interface> {
        self.capabilities.iter().map(|cap| cap.interface).collect()
    }

    #[must_use]
    pub fn capability(&self, interface: Interface) -> Option<&Capability> {
        self.capabilities.iter().find(|cap| cap.interface == interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_entity_id_to_endpoint_id_and_back() {
        let entity: EntityId = "switch.test".parse().unwrap();
        let endpoint = EndpointId::from(&entity);
        assert_eq!(endpoint.as_str(), "switch#test");
        assert_eq!(endpoint.to_entity_id().unwrap(), entity);
    }

    #[test]
    fn should_reject_endpoint_without_separator() {
        assert!(EndpointId::from("garbage").to_entity_id().is_err());
    }

    #[test]
    fn should_serialize_capability() {
        let cap = Capability::new(Interface::PowerController);
        let json = serde_json::to_value(&cap).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "AlexaInterface",
                "interface": "Alexa.PowerController",
                "version": "3",
                "properties": {
                    "supported": [{"name": "powerState"}],
                    "proactivelyReported": false,
                    "retrievable": true
                }
            })
        );
    }

    #[test]
    fn should_serialize_deactivation_flag_only_when_set() {
        let cap = Capability::new(Interface::SceneController).with_deactivation(true);
        let json = serde_json::to_value(&cap).unwrap();
        assert_eq!(json["supportsDeactivation"], true);
        assert_eq!(json["properties"]["supported"], serde_json::json!([]));
    }

    #[test]
    fn should_serialize_endpoint_in_camel_case() {
        let endpoint = Endpoint {
            endpoint_id: EndpointId::from("switch#test"),
            friendly_name: "Test switch".to_string(),
            description: "switch.test".to_string(),
            manufacturer_name: "voxbridge".to_string(),
            display_categories: vec![DisplayCategory::Switch],
            capabilities: vec![Capability::new(Interface::PowerController)],
        };
        let json = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(json["endpointId"], "switch#test");
        assert_eq!(json["friendlyName"], "Test switch");
        assert_eq!(json["manufacturerName"], "voxbridge");
        assert_eq!(json["displayCategories"][0], "SWITCH");
        assert_eq!(endpoint.interfaces(), vec![Interface::PowerController]);
    }
}
