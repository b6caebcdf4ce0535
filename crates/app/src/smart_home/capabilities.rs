//! Capability model: maps a hub entity onto a protocol endpoint.

use voxbridge_domain::entity::{Domain, HubEntity};
use voxbridge_domain::feature::{FeatureSet, climate, cover, fan, light, media_player};
use voxbridge_domain::protocol::{Capability, DisplayCategory, Endpoint, EndpointId, Interface};
use voxbridge_domain::temperature::TemperatureUnit;

use super::attr;
use super::config::EntityOverrides;

/// `manufacturerName` of every endpoint.
pub const MANUFACTURER_NAME: &str = "voxbridge";

const SCENE_DESCRIPTION_SUFFIX: &str = " (Scene connected via voxbridge)";

/// Display category for an entity, `None` for domains the bridge does not map.
#[must_use]
pub fn display_category(entity: &HubEntity) -> Option<DisplayCategory> {
    let category = match entity.domain() {
        Domain::Switch => DisplayCategory::Switch,
        Domain::Light => DisplayCategory::Light,
        Domain::Lock => DisplayCategory::Smartlock,
        Domain::Climate => DisplayCategory::Thermostat,
        Domain::Sensor => DisplayCategory::TemperatureSensor,
        Domain::Cover => match entity.attributes.str(attr::DEVICE_CLASS) {
            None | Some("garage" | "door" | "gate") => DisplayCategory::Door,
            Some(_) => DisplayCategory::Other,
        },
        Domain::MediaPlayer => DisplayCategory::Tv,
        Domain::Script => DisplayCategory::ActivityTrigger,
        Domain::Scene => DisplayCategory::SceneTrigger,
        Domain::Fan
        | Domain::Alert
        | Domain::Automation
        | Domain::Group
        | Domain::InputBoolean => DisplayCategory::Other,
        Domain::Other(_) => return None,
    };
    Some(category)
}

/// Capability interfaces of an entity, base capability first.
#[must_use]
pub fn capabilities(entity: &HubEntity) -> Vec<Capability> {
    let features = entity.attributes.features();
    match entity.domain() {
        Domain::Alert
        | Domain::Automation
        | Domain::Group
        | Domain::InputBoolean
        | Domain::Switch => vec![Capability::new(Interface::PowerController)],
        Domain::Light => light_capabilities(features),
        Domain::Cover => with_optional(
            Interface::PercentageController,
            features.contains(cover::SUPPORT_SET_POSITION),
        ),
        Domain::Fan => with_optional(
            Interface::PercentageController,
            features.contains(fan::SUPPORT_SET_SPEED),
        ),
        Domain::Climate => vec![
            thermostat_capability(features),
            Capability::new(Interface::TemperatureSensor),
        ],
        Domain::Lock => vec![Capability::new(Interface::LockController)],
        Domain::MediaPlayer => media_player_capabilities(features),
        Domain::Scene => vec![Capability::new(Interface::SceneController).with_deactivation(false)],
        Domain::Script => vec![
            Capability::new(Interface::SceneController)
                .with_deactivation(entity.attributes.flag(attr::CAN_CANCEL)),
        ],
        Domain::Sensor => {
            let unit = entity.attributes.str(attr::UNIT_OF_MEASUREMENT);
            if unit.and_then(TemperatureUnit::from_symbol).is_some() {
                vec![Capability::new(Interface::TemperatureSensor)]
            } else {
                Vec::new()
            }
        }
        Domain::Other(_) => Vec::new(),
    }
}

fn with_optional(interface: Interface, enabled: bool) -> Vec<Capability> {
    let mut caps = vec![Capability::new(Interface::PowerController)];
    if enabled {
        caps.push(Capability::new(interface));
    }
    caps
}

fn light_capabilities(features: FeatureSet) -> Vec<Capability> {
    let mut caps = vec![Capability::new(Interface::PowerController)];
    if features.contains(light::SUPPORT_BRIGHTNESS) {
        caps.push(Capability::new(Interface::BrightnessController));
    }
    if features.contains(light::SUPPORT_COLOR) {
        caps.push(Capability::new(Interface::ColorController));
    }
    if features.contains(light::SUPPORT_COLOR_TEMP) {
        caps.push(Capability::new(Interface::ColorTemperatureController));
    }
    caps
}

fn thermostat_capability(features: FeatureSet) -> Capability {
    let supported = [
        (climate::SUPPORT_OPERATION_MODE, "thermostatMode"),
        (climate::SUPPORT_TARGET_TEMPERATURE, "targetSetpoint"),
        (climate::SUPPORT_TARGET_TEMPERATURE_LOW, "lowerSetpoint"),
        (climate::SUPPORT_TARGET_TEMPERATURE_HIGH, "upperSetpoint"),
    ]
    .into_iter()
    .filter(|(bit, _)| features.contains(*bit))
    .map(|(_, name)| name)
    .collect();
    Capability::new(Interface::ThermostatController).with_supported(supported)
}

fn media_player_capabilities(features: FeatureSet) -> Vec<Capability> {
    let mut caps = vec![Capability::new(Interface::PowerController)];
    if features.contains(media_player::SUPPORT_VOLUME_SET) {
        caps.push(Capability::new(Interface::Speaker));
    }
    if features.intersects(media_player::SUPPORT_VOLUME_MUTE | media_player::SUPPORT_VOLUME_STEP) {
        caps.push(Capability::new(Interface::StepSpeaker));
    }
    let playback = media_player::SUPPORT_PLAY
        | media_player::SUPPORT_PAUSE
        | media_player::SUPPORT_STOP
        | media_player::SUPPORT_NEXT_TRACK
        | media_player::SUPPORT_PREVIOUS_TRACK;
    if features.intersects(playback) {
        caps.push(Capability::new(Interface::PlaybackController));
    }
    if features.contains(media_player::SUPPORT_SELECT_SOURCE) {
        caps.push(Capability::new(Interface::InputController));
    }
    caps
}

/// Build the endpoint for an entity, `None` when it has no category or no
/// capability.
#[must_use]
pub fn build_endpoint(entity: &HubEntity, overrides: Option<&EntityOverrides>) -> Option<Endpoint> {
    let category = display_category(entity)?;
    let capabilities = capabilities(entity);
    if capabilities.is_empty() {
        return None;
    }

    let mut description = entity.entity_id.to_string();
    if entity.domain() == Domain::Scene {
        description.push_str(SCENE_DESCRIPTION_SUFFIX);
    }
    let mut endpoint = Endpoint {
        endpoint_id: EndpointId::from(&entity.entity_id),
        friendly_name: entity.name(),
        description,
        manufacturer_name: MANUFACTURER_NAME.to_string(),
        display_categories: vec![category],
        capabilities,
    };

    if let Some(overrides) = overrides {
        if let Some(name) = &overrides.name {
            endpoint.friendly_name.clone_from(name);
        }
        if let Some(description) = &overrides.description {
            endpoint.description.clone_from(description);
        }
        if let Some(category) = overrides.display_categories {
            endpoint.display_categories = vec![category];
        }
    }
    Some(endpoint)
}
